//! Password strength analysis library
//!
//! Evaluates a candidate password and produces a composite assessment:
//! a 0-100 score, a qualitative tier, theoretical entropy, an estimated
//! brute-force crack time, and an ordered list of diagnostic findings.
//! Advisory strength estimation only; nothing here hashes, stores, or
//! transmits passwords.
//!
//! # Features
//!
//! - `async` (default): Enables cancellation tokens and the channel-based
//!   wrapper for interactive callers
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_METER_BLACKLIST`: Custom path to the optional common-password
//!   blacklist file (default: `./assets/blacklist.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_meter::analyze_password;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Tr0ub4dor&3xyz99".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let result = analyze_password(&password, None).unwrap();
//!
//! #[cfg(not(feature = "async"))]
//! let result = analyze_password(&password).unwrap();
//!
//! println!("Score: {}/100 ({})", result.score, result.tier);
//! println!("Crack time: {}", result.crack_time);
//! for finding in &result.findings {
//!     println!("- {}", finding.message);
//! }
//! ```

// Internal modules
mod blacklist;
mod charset;
mod crack_time;
mod evaluator;
mod sections;
mod types;

// Public API
pub use blacklist::{BlacklistError, init_blacklist, init_blacklist_from_path, is_blacklisted};
pub use charset::{SYMBOLS, charset_profile, entropy_bits};
pub use crack_time::crack_time_label;
pub use evaluator::{AnalysisError, analyze_password};
pub use types::{AnalysisResult, CharsetProfile, Finding, Severity, Tier};

#[cfg(feature = "async")]
pub use evaluator::analyze_password_tx;
