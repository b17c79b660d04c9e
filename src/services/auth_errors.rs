/// Traduce el código de error del backend de auth a un mensaje legible
pub fn generate_auth_error(message: &str) -> String {
    match message {
        "INVALID_PASSWORD" | "EMAIL_NOT_FOUND" | "INVALID_LOGIN_CREDENTIALS" => {
            "Email or password entered incorrectly".to_string()
        }
        "EMAIL_EXISTS" => "A user with this email already exists".to_string(),
        m if m.starts_with("TOO_MANY_ATTEMPTS_TRY_LATER") => {
            "Too many login attempts. Try again later".to_string()
        }
        _ => "Something went wrong. Try again later".to_string(),
    }
}
