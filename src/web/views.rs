//! HTML rendering for every page the catalog serves. Each view takes the data
//! its route hands it and returns a complete document.

use std::fmt::Write;

use crate::models::Book;

/// Which flavour of the book form to render.
pub enum FormTarget<'a> {
    Add,
    Edit(&'a Book),
}

/// Escape text for safe interpolation into element bodies and quoted
/// attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
<meta charset=\"utf-8\">
<title>{title}</title>
</head>
<body>
<nav><a href=\"/\">Home</a> | <a href=\"/books\">Books</a> | <a href=\"/add\">Add a book</a></nav>
<main>
{body}
</main>
</body>
</html>
",
        title = escape(title),
    )
}

pub fn home() -> String {
    layout(
        "Library",
        "<h1>Welcome to the Library</h1>
<p>Browse the <a href=\"/books\">catalog</a> or <a href=\"/add\">add a new book</a>.</p>",
    )
}

pub fn book_list(books: &[Book]) -> String {
    let mut body = String::from("<h1>Books</h1>\n");

    if books.is_empty() {
        body.push_str("<p>The catalog is empty.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for book in books {
            // Writing into a String cannot fail.
            let _ = writeln!(
                body,
                "<li><a href=\"/book/{id}\">{title}</a> by {author}{year} \
                 [<a href=\"/edit/{id}\">edit</a>] [<a href=\"/delete/{id}\">delete</a>]</li>",
                id = book.id,
                title = escape(&book.title),
                author = escape(&book.author),
                year = match book.published_year {
                    Some(_) => format!(" ({})", escape(&book.year_label())),
                    None => String::new(),
                },
            );
        }
        body.push_str("</ul>\n");
    }

    body.push_str("<p><a href=\"/add\">Add a book</a></p>");
    layout("Books", &body)
}

pub fn book_detail(book: &Book) -> String {
    let year = if book.published_year.is_some() {
        escape(&book.year_label())
    } else {
        "unknown".to_string()
    };

    let body = format!(
        "<h1>{title}</h1>
<dl>
<dt>Author</dt><dd>{author}</dd>
<dt>Published</dt><dd>{year}</dd>
</dl>
<p><a href=\"/edit/{id}\">Edit</a> | <a href=\"/delete/{id}\">Delete</a> | <a href=\"/books\">Back to list</a></p>",
        id = book.id,
        title = escape(&book.title),
        author = escape(&book.author),
    );
    layout(&book.title, &body)
}

pub fn book_form(target: FormTarget<'_>) -> String {
    let (heading, action, title, author, year) = match target {
        FormTarget::Add => ("Add a book".to_string(), "/add".to_string(), "", "", None),
        FormTarget::Edit(book) => (
            format!("Edit {}", book.title),
            format!("/edit/{}", book.id),
            book.title.as_str(),
            book.author.as_str(),
            book.published_year,
        ),
    };
    let year = year.map(|year| year.to_string()).unwrap_or_default();

    let body = format!(
        "<h1>{heading}</h1>
<form method=\"post\" action=\"{action}\">
<label>Title <input type=\"text\" name=\"title\" value=\"{title}\" required></label>
<label>Author <input type=\"text\" name=\"author\" value=\"{author}\" required></label>
<label>Published year <input type=\"number\" name=\"published_year\" value=\"{year}\"></label>
<button type=\"submit\">Save</button>
</form>
<p><a href=\"/books\">Cancel</a></p>",
        heading = escape(&heading),
        title = escape(title),
        author = escape(author),
    );
    layout(&heading, &body)
}

/// Deleting is a two-step flow: this page posts back to the same path.
pub fn confirm_delete(book: &Book) -> String {
    let body = format!(
        "<h1>Delete {title}?</h1>
<p>{title} by {author} will be removed permanently.</p>
<form method=\"post\" action=\"/delete/{id}\">
<button type=\"submit\">Delete</button>
</form>
<p><a href=\"/book/{id}\">Cancel</a></p>",
        id = book.id,
        title = escape(&book.title),
        author = escape(&book.author),
    );
    layout("Confirm delete", &body)
}

pub fn not_found() -> String {
    layout(
        "Not Found",
        "<h1>Not Found</h1>
<p>The requested page or book does not exist.</p>",
    )
}

pub fn method_not_allowed() -> String {
    layout(
        "Method Not Allowed",
        "<h1>Method Not Allowed</h1>
<p>This page does not accept that kind of request.</p>",
    )
}

pub fn bad_request(message: &str) -> String {
    let body = format!(
        "<h1>Bad Request</h1>
<p>{}</p>",
        escape(message)
    );
    layout("Bad Request", &body)
}

pub fn server_error() -> String {
    layout(
        "Internal Server Error",
        "<h1>Internal Server Error</h1>
<p>Something went wrong while handling the request.</p>",
    )
}
