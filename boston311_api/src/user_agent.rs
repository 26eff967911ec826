/// User agent sent with every request, e.g. `boston311/0.1.0`.
pub fn get_user_agent() -> String {
    format!("{}/{}", "boston311", env!("CARGO_PKG_VERSION"))
}
