use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use openssl::pkey::PKey;
use openssl::rsa::Rsa;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}

/// RS256 keys the fake backend signs and checks its tokens with.
#[derive(Clone)]
pub struct KeyPair {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl KeyPair {
    pub fn generate() -> Self {
        let rsa = Rsa::generate(2048).unwrap();
        let pkey = PKey::from_rsa(rsa).unwrap();
        let private_key = pkey.private_key_to_pem_pkcs8().unwrap();
        let public_key = pkey.public_key_to_pem().unwrap();

        KeyPair {
            encoding: EncodingKey::from_rsa_pem(&private_key).unwrap(),
            decoding: DecodingKey::from_rsa_pem(&public_key).unwrap(),
        }
    }

    pub fn issue(&self, username: &str, role: &str) -> String {
        let now = Utc::now();

        let claims = Claims {
            sub: username.to_string(),
            role: role.to_string(),
            exp: (now + Duration::hours(1)).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::new(Algorithm::RS256), &claims, &self.encoding).unwrap()
    }

    pub fn verify(&self, token: &str) -> Option<Claims> {
        decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::RS256))
            .ok()
            .map(|token| token.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[fixture]
    #[once]
    fn keys() -> KeyPair {
        KeyPair::generate()
    }

    #[rstest]
    fn test_issued_token_verifies(keys: &KeyPair) {
        let claims = keys.verify(&keys.issue("admin", "ROLE_ADMIN")).unwrap();

        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.role, "ROLE_ADMIN");
        assert!(claims.exp > claims.iat);
    }

    #[rstest]
    fn test_foreign_token_is_rejected(keys: &KeyPair) {
        let foreign = KeyPair::generate().issue("admin", "ROLE_ADMIN");

        assert!(keys.verify(&foreign).is_none());
        assert!(keys.verify("eyJ0eXAiOiJKV1QiLCJhbGciOiJIUzUxMiJ9").is_none());
    }
}
