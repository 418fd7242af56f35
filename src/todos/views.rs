//! HTML rendering for the todo list and edit pages.
use crate::shared::models::Todo;

const PAGE_STYLE: &str = "body { font-family: sans-serif; max-width: 720px; margin: 2em auto; } \
    table { border-collapse: collapse; width: 100%; } \
    th, td { border: 1px solid #ccc; padding: 6px 10px; text-align: left; } \
    form.inline { display: inline; } \
    input[type=text] { width: 100%; box-sizing: border-box; margin-bottom: 8px; }";

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>{}</title><style>{}</style></head>
<body>
{}
</body>
</html>"#,
        escape_html(title),
        PAGE_STYLE,
        body
    )
}

pub fn render_index(todos: &[Todo]) -> String {
    let mut body = String::new();
    body.push_str("<h1>Todo List</h1>\n");
    body.push_str(
        r#"<form action="/" method="post">
<label for="title">Title</label>
<input type="text" id="title" name="title" required>
<label for="desc">Description</label>
<input type="text" id="desc" name="desc" required>
<button type="submit">Add Todo</button>
</form>
"#,
    );
    body.push_str("<table>\n<tr><th>#</th><th>Title</th><th>Description</th><th>Created</th><th>Actions</th></tr>\n");
    if todos.is_empty() {
        body.push_str(r#"<tr><td colspan="5">No todos yet</td></tr>"#);
        body.push('\n');
    } else {
        for todo in todos {
            body.push_str(&format!(
                r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><a href="/update/{}">Edit</a> <a href="/delete/{}">Delete</a></td></tr>"#,
                todo.sno,
                escape_html(&todo.title),
                escape_html(&todo.description),
                todo.date_created.format("%Y-%m-%d %H:%M"),
                todo.sno,
                todo.sno,
            ));
            body.push('\n');
        }
    }
    body.push_str("</table>");
    page("Todo List", &body)
}

pub fn render_update(todo: &Todo) -> String {
    let body = format!(
        r#"<h1>Update Todo</h1>
<form action="/update/{}" method="post">
<label for="title">Title</label>
<input type="text" id="title" name="title" value="{}" required>
<label for="desc">Description</label>
<input type="text" id="desc" name="desc" value="{}" required>
<button type="submit">Update</button>
</form>
<p><a href="/">Back</a></p>"#,
        todo.sno,
        escape_html(&todo.title),
        escape_html(&todo.description),
    );
    page("Update Todo", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_todo() -> Todo {
        Todo {
            sno: 1,
            title: "Buy milk".to_string(),
            description: "2 liters".to_string(),
            date_created: Utc::now(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"a" & b</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; b&lt;/b&gt;"
        );
    }

    #[test]
    fn test_index_lists_todos() {
        let html = render_index(&[sample_todo()]);
        assert!(html.contains("Buy milk"));
        assert!(html.contains("2 liters"));
        assert!(html.contains("/update/1"));
        assert!(html.contains("/delete/1"));
    }

    #[test]
    fn test_index_empty_state() {
        let html = render_index(&[]);
        assert!(html.contains("No todos yet"));
    }

    #[test]
    fn test_index_escapes_user_content() {
        let mut todo = sample_todo();
        todo.title = "<script>alert(1)</script>".to_string();
        let html = render_index(&[todo]);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_update_page_is_prefilled() {
        let html = render_update(&sample_todo());
        assert!(html.contains(r#"action="/update/1""#));
        assert!(html.contains(r#"value="Buy milk""#));
        assert!(html.contains(r#"value="2 liters""#));
    }
}
