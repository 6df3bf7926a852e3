use thiserror::Error;

/// Top-level error type for the Hypogear geometry kernel.
#[derive(Debug, Error)]
pub enum HypogearError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// Errors raised while validating drive design parameters.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("parameter {parameter} = {value} must be positive")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("parameter {parameter} must be at least 1")]
    ZeroCount { parameter: &'static str },
}

/// Errors raised by the pressure-angle limit solver.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error(
        "pressure angle never crosses the {limit_deg} degree limit within the scanned 0-179 degree range"
    )]
    DegenerateLimit { limit_deg: f64 },
}

/// Errors raised while sampling the cam profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("rolling-angle denominator vanished at sample indices {samples:?}")]
    Singularity { samples: Vec<usize> },
}

/// Convenience type alias for results using [`HypogearError`].
pub type Result<T> = std::result::Result<T, HypogearError>;
