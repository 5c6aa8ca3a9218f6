//! Input validation utilities

/// Longest accepted algorithm or backend identifier
const MAX_IDENTIFIER_LENGTH: usize = 64;

/// Validate an algorithm name.
///
/// The name is spliced into an executable filename, so only ASCII
/// alphanumerics and underscores are accepted.
pub fn validate_algorithm_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("Algorithm name cannot be empty");
    }
    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err("Algorithm name must be at most 64 characters");
    }
    if !is_identifier(name) {
        return Err("Algorithm name can only contain letters, numbers, and underscores");
    }
    Ok(())
}

/// Validate a backend label
pub fn validate_backend_label(label: &str) -> Result<(), &'static str> {
    if label.is_empty() {
        return Err("Backend label cannot be empty");
    }
    if label.len() > MAX_IDENTIFIER_LENGTH {
        return Err("Backend label must be at most 64 characters");
    }
    if !is_identifier(label) {
        return Err("Backend label can only contain letters, numbers, and underscores");
    }
    Ok(())
}

/// Validate input sizes (every size must be a positive integer)
pub fn validate_sizes(sizes: &[u64]) -> Result<(), &'static str> {
    if sizes.iter().any(|&size| size == 0) {
        return Err("Input sizes must be positive integers");
    }
    Ok(())
}

fn is_identifier(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
