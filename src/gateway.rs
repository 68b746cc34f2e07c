/// The transport collaborator responsible for exchanging entity documents
/// with the remote accounting service.
///
/// Implementations live outside this crate; entities only keep a non-owning
/// back-reference (`std::sync::Weak<dyn Gateway>`) to the gateway they were
/// fetched through, so an entity never extends its transport's lifetime.
pub trait Gateway {
    /// Base URL of the remote service this gateway talks to.
    fn endpoint(&self) -> &str;
}
