//! Rendering collaborator for the server-rendered pages.
//!
//! GET routes get a full page; mutating routes get back just the list
//! fragment so the client swaps it in place of the current one.

use crate::models::anime::Anime;
use html_escape::{encode_double_quoted_attribute, encode_text};

pub fn index_page(animes: &[Anime]) -> String {
    let body = format!(
        r##"<h1>Anime Collection</h1>
<form hx-post="/animes" hx-target="#anime-list" hx-swap="outerHTML">
  <input type="text" name="name" placeholder="Name" required>
  <input type="text" name="author" placeholder="Author" required>
  <input type="number" name="episodes" placeholder="Episodes" required>
  <button type="submit">Add</button>
</form>
{}"##,
        list_fragment(animes)
    );

    page("Anime Collection", &body)
}

pub fn list_fragment(animes: &[Anime]) -> String {
    if animes.is_empty() {
        return r#"<div id="anime-list"><p>No anime yet.</p></div>"#.to_string();
    }

    let mut rows = String::new();
    for anime in animes {
        rows.push_str(&format!(
            r##"    <tr>
      <td>{name}</td>
      <td>{author}</td>
      <td>{episodes}</td>
      <td>
        <a href="/update-form/{id}">Edit</a>
        <button hx-delete="/animes/{id}" hx-target="#anime-list" hx-swap="outerHTML">Delete</button>
      </td>
    </tr>
"##,
            name = encode_text(&anime.name),
            author = encode_text(&anime.author),
            episodes = anime.episodes,
            id = anime.id,
        ));
    }

    format!(
        r#"<div id="anime-list">
  <table>
    <tr><th>Name</th><th>Author</th><th>Episodes</th><th></th></tr>
{rows}  </table>
</div>"#
    )
}

pub fn edit_form_page(anime: &Anime) -> String {
    let body = format!(
        r##"<h1>Edit Anime</h1>
<form hx-put="/animes/{id}" hx-target="#anime-list" hx-swap="outerHTML">
  <input type="text" name="name" value="{name}" required>
  <input type="text" name="author" value="{author}" required>
  <input type="number" name="episodes" value="{episodes}" required>
  <button type="submit">Save</button>
</form>
<a href="/">Back</a>"##,
        id = anime.id,
        name = encode_double_quoted_attribute(&anime.name),
        author = encode_double_quoted_attribute(&anime.author),
        episodes = anime.episodes,
    );

    page("Edit Anime", &body)
}

pub fn error_body(message: &str) -> String {
    format!(
        r#"<div class="error" role="alert">{}</div>"#,
        encode_text(message)
    )
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <script src="https://unpkg.com/htmx.org@1.9.12"></script>
</head>
<body>
{body}
</body>
</html>"#,
        title = encode_text(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: i32, name: &str) -> Anime {
        Anime {
            id,
            name: name.to_string(),
            author: "Author".to_string(),
            episodes: 12,
        }
    }

    #[test]
    fn test_empty_list_fragment() {
        let html = list_fragment(&[]);
        assert!(html.contains(r#"id="anime-list""#));
        assert!(html.contains("No anime yet"));
    }

    #[test]
    fn test_list_fragment_escapes_content() {
        let anime = sample(1, "<script>alert(1)</script>");
        let html = list_fragment(&[anime]);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_edit_form_prefills_values() {
        let anime = sample(7, "Bleach");
        let html = edit_form_page(&anime);
        assert!(html.contains(r#"hx-put="/animes/7""#));
        assert!(html.contains(r#"value="Bleach""#));
        assert!(html.contains(r#"value="12""#));
    }

    #[test]
    fn test_error_body_escapes_message() {
        let html = error_body("bad <input>");
        assert!(html.contains("bad &lt;input&gt;"));
    }
}
