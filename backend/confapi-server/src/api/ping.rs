/// GET /rest/confapi/1/ping
pub async fn ping() -> &'static str {
    "pong"
}
