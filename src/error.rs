pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("url {url:?} contains {found:?} at byte {offset}, which cannot appear in a sourceMappingURL comment")]
    InvalidUrl {
        url: String,
        offset: usize,
        found: char,
    },
}

impl Error {
    #[cold]
    pub(crate) fn invalid_url(url: &str, offset: usize, found: char) -> Self {
        Self::InvalidUrl {
            url: url.to_owned(),
            offset,
            found,
        }
    }
}
