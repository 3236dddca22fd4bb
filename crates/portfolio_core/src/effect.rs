use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Push `url` as a new history entry without reloading.
    PushHistory { url: Url },
}
