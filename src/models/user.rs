use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

const AVATAR_BASE_URL: &str = "https://avatars.dicebear.com/api/avataaars";
const AVATAR_SEED_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Usuario tal como lo guarda el backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub rate: u32,
    #[serde(rename = "completedMeetings")]
    pub completed_meetings: u32,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(default)]
    pub qualities: Vec<String>,
    /// Campos de perfil que no modelamos (sex, licence, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    /// Perfil por defecto para un usuario recién registrado: rate 1..=5,
    /// reuniones 0..=200 y avatar aleatorio. Los campos de `profile`
    /// pisan los valores generados.
    pub fn with_defaults<R: Rng>(
        id: &str,
        email: &str,
        profile: Map<String, Value>,
        rng: &mut R,
    ) -> Result<Self, serde_json::Error> {
        let mut fields = match json!({
            "_id": id,
            "email": email,
            "rate": rng.gen_range(1..=5),
            "completedMeetings": rng.gen_range(0..=200),
            "image": format!("{}/{}.svg", AVATAR_BASE_URL, avatar_seed(rng)),
        }) {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        fields.extend(profile);
        serde_json::from_value(Value::Object(fields))
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

fn avatar_seed<R: Rng>(rng: &mut R) -> String {
    (0..5)
        .map(|_| AVATAR_SEED_CHARS[rng.gen_range(0..AVATAR_SEED_CHARS.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn defaults_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let user = UserRecord::with_defaults("u1", "a@b.c", Map::new(), &mut rng).unwrap();
            assert!((1..=5).contains(&user.rate));
            assert!(user.completed_meetings <= 200);
            assert!(user.image.starts_with(AVATAR_BASE_URL));
            assert!(user.image.ends_with(".svg"));
        }
    }

    #[test]
    fn profile_fields_override_and_extend_defaults() {
        let mut rng = StdRng::seed_from_u64(1);
        let profile = match json!({
            "name": "Ana",
            "rate": 5,
            "profession": "p1",
            "qualities": ["q1", "q2"],
            "sex": "female"
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        let user = UserRecord::with_defaults("u1", "a@b.c", profile, &mut rng).unwrap();

        assert_eq!(user.name, "Ana");
        assert_eq!(user.rate, 5);
        assert_eq!(user.profession.as_deref(), Some("p1"));
        assert_eq!(user.qualities, vec!["q1", "q2"]);
        assert_eq!(user.extra.get("sex").unwrap(), "female");
    }

    #[test]
    fn wire_format_uses_backend_names() {
        let user: UserRecord = serde_json::from_str(
            r#"{"_id":"u1","email":"a@b.c","rate":3,"completedMeetings":12,"image":"x.svg"}"#,
        )
        .unwrap();

        assert_eq!(user.id, "u1");
        assert_eq!(user.display_name(), "a@b.c");
        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["completedMeetings"], 12);
        assert!(back.get("profession").is_none());
    }
}
