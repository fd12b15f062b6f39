//! Server-Rendered Pages
//!
//! Minimal HTML shells; the client-side script drives the API.

use axum::{
    Router,
    response::Html,
    routing::get,
};

/// Router for the HTML pages
pub fn pages_router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/login", get(login))
        .route("/register", get(register))
        .route("/dashboard", get(dashboard))
        .route("/dashboard/view/{id}", get(view_calculation))
        .route("/dashboard/edit/{id}", get(edit_calculation))
        .route("/profile", get(profile))
}

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
</head>
<body>
{body}
</body>
</html>"#
    ))
}

async fn index() -> Html<String> {
    page(
        "Calculations",
        r#"  <h1>Calculations</h1>
  <p><a href="/login">Log in</a> or <a href="/register">create an account</a> to get started.</p>"#,
    )
}

async fn login() -> Html<String> {
    page(
        "Log In",
        r#"  <h1>Log In</h1>
  <form id="login-form">
    <input name="username" placeholder="Username" required>
    <input name="password" type="password" placeholder="Password" required>
    <button type="submit">Log In</button>
  </form>"#,
    )
}

async fn register() -> Html<String> {
    page(
        "Register",
        r#"  <h1>Register</h1>
  <form id="register-form">
    <input name="first_name" placeholder="First name" required>
    <input name="last_name" placeholder="Last name" required>
    <input name="email" type="email" placeholder="Email" required>
    <input name="username" placeholder="Username" required>
    <input name="password" type="password" placeholder="Password" required>
    <input name="confirm_password" type="password" placeholder="Confirm password" required>
    <button type="submit">Register</button>
  </form>"#,
    )
}

async fn dashboard() -> Html<String> {
    page(
        "Dashboard",
        r#"  <h1>Dashboard</h1>
  <div id="calculations"></div>
  <div id="report"></div>"#,
    )
}

async fn view_calculation() -> Html<String> {
    page(
        "Calculation",
        r#"  <h1>Calculation</h1>
  <div id="calculation"></div>"#,
    )
}

async fn edit_calculation() -> Html<String> {
    page(
        "Edit Calculation",
        r#"  <h1>Edit Calculation</h1>
  <form id="edit-form">
    <input name="inputs" placeholder="Comma-separated numbers" required>
    <button type="submit">Save</button>
  </form>"#,
    )
}

async fn profile() -> Html<String> {
    page(
        "Profile",
        r#"  <h1>Profile</h1>
  <div id="profile"></div>
  <form id="change-password-form">
    <input name="current_password" type="password" placeholder="Current password" required>
    <input name="new_password" type="password" placeholder="New password" required>
    <button type="submit">Change Password</button>
  </form>"#,
    )
}
