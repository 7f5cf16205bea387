//! Domain error types.
//!
//! These errors represent construction failures of domain values.
//! Geometry reconstruction itself never fails; see the `geometry` module.

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Itinerary has no legs
    #[error("itinerary must have at least one leg")]
    EmptyItinerary,

    /// Route path has no coordinates
    #[error("route path must have at least one coordinate")]
    EmptyPath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::EmptyItinerary;
        assert_eq!(err.to_string(), "itinerary must have at least one leg");

        let err = DomainError::EmptyPath;
        assert_eq!(
            err.to_string(),
            "route path must have at least one coordinate"
        );
    }
}
