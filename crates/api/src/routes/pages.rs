//! Static page shells
//!
//! The site renders client-side; these shells exist so the server has pages
//! to serve and the session gate has something to protect. No styling, just
//! the page skeletons.

use axum::response::Html;

const HOME: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Portfolio</title></head>
<body>
<h1>Portfolio</h1>
<p>Selected work. Projects load from <code>/api/projects</code>.</p>
<nav><a href="/login">Admin login</a></nav>
</body>
</html>
"#;

const LOGIN: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Login - Portfolio</title></head>
<body>
<h1>Admin Login</h1>
<form method="post" action="/api/auth/login">
<label>Email <input type="email" name="email"></label>
<label>Password <input type="password" name="password"></label>
<button type="submit">Sign in</button>
</form>
<p><strong>Demo Mode:</strong> use <code>admin@portfolio.com</code> / <code>admin123</code></p>
</body>
</html>
"#;

const ADMIN_DASHBOARD: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Admin - Portfolio</title></head>
<body>
<h1>Dashboard</h1>
<nav>
<a href="/admin/projects">Projects</a>
<a href="/admin/profile">Profile</a>
</nav>
</body>
</html>
"#;

const ADMIN_PROJECTS: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Projects - Portfolio</title></head>
<body>
<h1>Manage Projects</h1>
<p>Project table loads from <code>/api/projects?scope=admin</code>.</p>
<form method="post" action="/api/projects" enctype="multipart/form-data">
<label>Title <input type="text" name="title"></label>
<label>Description <textarea name="description"></textarea></label>
<label>Image <input type="file" name="file"></label>
<button type="submit">Add project</button>
</form>
</body>
</html>
"#;

const ADMIN_PROFILE: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Profile - Portfolio</title></head>
<body>
<h1>Edit Profile</h1>
<form method="post" action="/api/profile" enctype="multipart/form-data">
<label>Bio <textarea name="bio"></textarea></label>
<label>Avatar <input type="file" name="avatar"></label>
<label>CV <input type="file" name="cv"></label>
<button type="submit">Save</button>
</form>
</body>
</html>
"#;

pub async fn home() -> Html<&'static str> {
    Html(HOME)
}

pub async fn login() -> Html<&'static str> {
    Html(LOGIN)
}

pub async fn admin_dashboard() -> Html<&'static str> {
    Html(ADMIN_DASHBOARD)
}

pub async fn admin_projects() -> Html<&'static str> {
    Html(ADMIN_PROJECTS)
}

pub async fn admin_profile() -> Html<&'static str> {
    Html(ADMIN_PROFILE)
}
