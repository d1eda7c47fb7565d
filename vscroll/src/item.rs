/// One row of the list: a pixel height and an opaque payload.
///
/// A height of 0 means "not specified"; ingestion replaces it with the
/// configured default height, so items held by the engine always carry a
/// positive height.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item<C> {
    pub height: u32,
    pub content: C,
}

impl<C> Item<C> {
    pub fn new(content: C, height: u32) -> Self {
        Self { height, content }
    }

    /// An item without an explicit height; the engine assigns the default
    /// height when the item is ingested.
    pub fn auto(content: C) -> Self {
        Self { height: 0, content }
    }
}

impl<C> From<C> for Item<C> {
    fn from(content: C) -> Self {
        Self::auto(content)
    }
}
