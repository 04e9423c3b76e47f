use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Encodes claims into signed tokens and validates them back.
///
/// Tokens are JWTs signed with HS256 (HMAC-SHA256) under a process-wide
/// secret: three base64url segments (header, payload, signature) joined by
/// dots. The signature covers header and payload, so any mutation of either
/// segment fails verification.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a codec signing with `secret`.
    ///
    /// The secret should be at least 32 bytes for HS256 and must be loaded
    /// from configuration, never hardcoded. It is shared immutably across
    /// all requests.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode and sign claims into a token string.
    ///
    /// # Errors
    /// * `EncodingFailed` - Serialization or signing failed
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        jsonwebtoken::encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Validate a token and return its claims.
    ///
    /// Checks run in order: structure, signature, claim invariants, expiry.
    /// A token whose expiry equals the current second is already expired.
    ///
    /// # Errors
    /// * `MalformedToken` - Not three parseable JWT segments, or the payload
    ///   violates a claim invariant (empty subject, `exp <= iat`)
    /// * `InvalidSignature` - Signature does not verify against the payload
    /// * `Expired` - Current time is at or after the claims' expiry
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        // Expiry is checked manually below: the library treats exp == now as
        // still valid, while this service counts the boundary as expired.
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(map_decode_error)?;

        // Serde only checks shape; reapply the constructor invariants so a
        // signed-but-degenerate payload cannot slip through.
        let inbound = data.claims;
        let claims = Claims::from_parts(inbound.sub, inbound.roles, inbound.iat, inbound.exp)
            .map_err(|e| TokenError::MalformedToken(e.to_string()))?;

        if claims.is_expired(Utc::now().timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Decode the subject without verifying signature or expiry.
    ///
    /// First half of the two-phase flow: the request filter extracts the
    /// subject to look up the identity's current credentials, then runs the
    /// full `decode`. The returned value must never feed an authorization
    /// decision on its own.
    ///
    /// # Errors
    /// * `MalformedToken` - Token structure does not parse
    pub fn extract_subject(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(map_decode_error)?;

        Ok(data.claims.sub)
    }
}

fn map_decode_error(e: jsonwebtoken::errors::Error) -> TokenError {
    match e.kind() {
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::MalformedToken(e.to_string()),
    }
}
