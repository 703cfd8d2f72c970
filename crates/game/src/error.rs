use bobsphere_kernel::LoadError;

/// Startup configuration errors. All are raised before the first frame.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("no display surface configured")]
    MissingDisplaySurface,
    #[error("no renderer configured")]
    MissingRenderer,
    #[error("shadow caster {0:?} does not name a mesh in the scene")]
    UnknownShadowCaster(String),
    #[error(transparent)]
    Config(#[from] LoadError),
}
