use axum::response::Html;

pub async fn index() -> Html<&'static str> {
    Html("<h2>Welcome to artscout</h2><p><a href='/login'>Login with Spotify</a></p>")
}
