pub type RasterResult<T> = Result<T, RasterError>;

#[derive(thiserror::Error, Debug)]
pub enum RasterError {
    #[error("invalid sigma: blur requires sigma > 0, got {0}")]
    InvalidSigma(f64),

    #[error("unsupported pixel format: {0}")]
    UnsupportedFormat(String),

    #[error("pixel data access failed: {0}")]
    DataAccessFailed(String),

    #[error("malformed curve: {0}")]
    MalformedCurve(String),

    #[error("sample count too large: {0}")]
    CountTooLarge(usize),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RasterError {
    pub fn data_access(msg: impl Into<String>) -> Self {
        Self::DataAccessFailed(msg.into())
    }

    pub fn malformed_curve(msg: impl Into<String>) -> Self {
        Self::MalformedCurve(msg.into())
    }

    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            RasterError::InvalidSigma(-1.0)
                .to_string()
                .contains("invalid sigma:")
        );
        assert!(
            RasterError::unsupported_format("x")
                .to_string()
                .contains("unsupported pixel format:")
        );
        assert!(
            RasterError::data_access("x")
                .to_string()
                .contains("pixel data access failed:")
        );
        assert!(
            RasterError::malformed_curve("x")
                .to_string()
                .contains("malformed curve:")
        );
        assert!(
            RasterError::CountTooLarge(7)
                .to_string()
                .contains("sample count too large:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = RasterError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
