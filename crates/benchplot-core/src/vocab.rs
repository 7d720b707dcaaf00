// Dweve Benchplot - Cryptographic Benchmark Reporting
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The fixed label vocabulary for benchmark categories.
//!
//! Raw measurement files carry categorical values as dotted enum tokens
//! such as `Enum.ffi` or `Enum.aesGcm`. Only the final segment is
//! significant; it is matched case-insensitively against a closed
//! vocabulary and normalized to a canonical display label.
//!
//! Normalization is idempotent: the canonical labels themselves parse
//! back to the same variant, so an already-normalized table can be fed
//! through the loader again without change.

use crate::error::{Error, Result};
use std::fmt;

/// Extract the significant part of a dotted raw token.
///
/// Takes the segment after the last `.` (the whole value when there is
/// no dot), trimmed of incidental whitespace.
fn final_segment(raw: &str) -> &str {
    raw.rsplit('.').next().unwrap_or(raw).trim()
}

/// The call path that performed the cryptographic operation.
///
/// # Examples
///
/// ```
/// use benchplot_core::Implementation;
///
/// let imp = Implementation::parse_token("Enum.platformChannel").unwrap();
/// assert_eq!(imp, Implementation::PlatformChannel);
/// assert_eq!(imp.label(), "Platform Channel");
///
/// // Idempotent: the canonical label parses back to itself
/// assert_eq!(
///     Implementation::parse_token("Platform Channel").unwrap(),
///     Implementation::PlatformChannel
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Implementation {
    /// Native-binding call path.
    Ffi,
    /// Platform-bridge call path.
    PlatformChannel,
    /// Pure high-level-language call path.
    Dart,
}

impl Implementation {
    /// All implementations in the fixed chart ordering.
    pub const ALL: [Implementation; 3] = [
        Implementation::Ffi,
        Implementation::PlatformChannel,
        Implementation::Dart,
    ];

    /// Canonical display label.
    pub fn label(&self) -> &'static str {
        match self {
            Implementation::Ffi => "FFI",
            Implementation::PlatformChannel => "Platform Channel",
            Implementation::Dart => "Dart",
        }
    }

    /// Normalize a raw token onto the vocabulary.
    ///
    /// Accepts dotted tokens (`Enum.ffi`), bare tokens in any casing
    /// (`platformChannel`, `PLATFORMCHANNEL`), and the canonical labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnmappedCategory`] for anything outside the
    /// vocabulary.
    pub fn parse_token(raw: &str) -> Result<Self> {
        match final_segment(raw).to_ascii_lowercase().as_str() {
            "ffi" => Ok(Implementation::Ffi),
            "platformchannel" | "platform channel" => Ok(Implementation::PlatformChannel),
            "dart" => Ok(Implementation::Dart),
            _ => Err(Error::UnmappedCategory {
                column: "Implementation".to_string(),
                raw: raw.to_string(),
            }),
        }
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The cipher that was benchmarked.
///
/// # Examples
///
/// ```
/// use benchplot_core::Algorithm;
///
/// let alg = Algorithm::parse_token("Enum.aesGcm").unwrap();
/// assert_eq!(alg, Algorithm::AesGcm256);
/// assert_eq!(alg.label(), "AES-GCM 256");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// AES in Galois/Counter mode with a 256-bit key.
    AesGcm256,
    /// ChaCha20 stream cipher with Poly1305 authenticator.
    ChaCha20Poly1305,
}

impl Algorithm {
    /// All algorithms in stable ordering.
    pub const ALL: [Algorithm; 2] = [Algorithm::AesGcm256, Algorithm::ChaCha20Poly1305];

    /// Canonical display label.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::AesGcm256 => "AES-GCM 256",
            Algorithm::ChaCha20Poly1305 => "ChaCha20-Poly1305",
        }
    }

    /// Normalize a raw token onto the vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnmappedCategory`] for anything outside the
    /// vocabulary.
    pub fn parse_token(raw: &str) -> Result<Self> {
        match final_segment(raw).to_ascii_lowercase().as_str() {
            "aesgcm" | "aes-gcm 256" => Ok(Algorithm::AesGcm256),
            "chachapoly" | "chacha20-poly1305" => Ok(Algorithm::ChaCha20Poly1305),
            _ => Err(Error::UnmappedCategory {
                column: "Algorithm".to_string(),
                raw: raw.to_string(),
            }),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implementation_dotted_tokens() {
        assert_eq!(
            Implementation::parse_token("Enum.ffi").unwrap(),
            Implementation::Ffi
        );
        assert_eq!(
            Implementation::parse_token("Enum.platformChannel").unwrap(),
            Implementation::PlatformChannel
        );
        assert_eq!(
            Implementation::parse_token("Enum.dart").unwrap(),
            Implementation::Dart
        );
    }

    #[test]
    fn test_implementation_case_insensitive() {
        assert_eq!(
            Implementation::parse_token("Enum.PlatformChannel").unwrap(),
            Implementation::PlatformChannel
        );
        assert_eq!(
            Implementation::parse_token("FFI").unwrap(),
            Implementation::Ffi
        );
    }

    #[test]
    fn test_implementation_whitespace_tolerant() {
        assert_eq!(
            Implementation::parse_token("Enum.ffi  ").unwrap(),
            Implementation::Ffi
        );
        assert_eq!(
            Implementation::parse_token("  dart").unwrap(),
            Implementation::Dart
        );
    }

    #[test]
    fn test_implementation_idempotent() {
        for imp in Implementation::ALL {
            assert_eq!(Implementation::parse_token(imp.label()).unwrap(), imp);
        }
    }

    #[test]
    fn test_implementation_unmapped() {
        let err = Implementation::parse_token("Enum.jni").unwrap_err();
        assert_eq!(
            err,
            Error::UnmappedCategory {
                column: "Implementation".to_string(),
                raw: "Enum.jni".to_string(),
            }
        );
    }

    #[test]
    fn test_algorithm_dotted_tokens() {
        assert_eq!(
            Algorithm::parse_token("Enum.aesGcm").unwrap(),
            Algorithm::AesGcm256
        );
        assert_eq!(
            Algorithm::parse_token("Enum.chaChaPoly").unwrap(),
            Algorithm::ChaCha20Poly1305
        );
    }

    #[test]
    fn test_algorithm_idempotent() {
        for alg in Algorithm::ALL {
            assert_eq!(Algorithm::parse_token(alg.label()).unwrap(), alg);
        }
    }

    #[test]
    fn test_algorithm_unmapped() {
        let err = Algorithm::parse_token("Enum.blowfish").unwrap_err();
        assert!(matches!(err, Error::UnmappedCategory { .. }));
        assert!(err.to_string().contains("Enum.blowfish"));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Implementation::Ffi.to_string(), "FFI");
        assert_eq!(Implementation::PlatformChannel.to_string(), "Platform Channel");
        assert_eq!(Implementation::Dart.to_string(), "Dart");
        assert_eq!(Algorithm::AesGcm256.to_string(), "AES-GCM 256");
        assert_eq!(Algorithm::ChaCha20Poly1305.to_string(), "ChaCha20-Poly1305");
    }
}
