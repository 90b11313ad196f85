//! Pure projection from the todo sequence to a renderable view model.
//!
//! # Design
//! `project` is a pure function of the item slice, so count computation,
//! row ordering, and escaping are all unit-testable without any display
//! environment. The consumer decides how to paint a `TodoListView`: an HTML
//! surface uses `title_html`, a terminal prints `title` as-is (terminals
//! already display text literally).

use crate::types::Todo;

/// One displayable row, in local-sequence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: i64,
    /// The title verbatim.
    pub title: String,
    /// The title with markup-significant characters escaped, safe to splice
    /// into HTML as literal text.
    pub title_html: String,
    pub completed: bool,
}

/// View model for the whole list: aggregate labels plus rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListView {
    /// `"{n} task"` / `"{n} tasks"`, plural unless the total is exactly 1.
    pub total_label: String,
    /// `"{k} completed"`.
    pub completed_label: String,
    pub rows: Vec<TodoRow>,
}

impl TodoListView {
    /// True when the empty-state placeholder should be shown instead of the
    /// list.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Compute the view model for the current item sequence.
pub fn project(items: &[Todo]) -> TodoListView {
    let total = items.len();
    let completed = items.iter().filter(|t| t.completed).count();
    let rows = items
        .iter()
        .map(|t| TodoRow {
            id: t.id,
            title: t.title.clone(),
            title_html: escape_html(&t.title),
            completed: t.completed,
        })
        .collect();

    TodoListView {
        total_label: format!("{total} task{}", if total == 1 { "" } else { "s" }),
        completed_label: format!("{completed} completed"),
        rows,
    }
}

/// Escape the five HTML-significant characters so arbitrary titles display
/// literally rather than being interpreted as markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, title: &str, completed: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn empty_sequence_shows_placeholder() {
        let view = project(&[]);
        assert!(view.is_empty());
        assert!(view.rows.is_empty());
        assert_eq!(view.total_label, "0 tasks");
        assert_eq!(view.completed_label, "0 completed");
    }

    #[test]
    fn singular_total_label() {
        let view = project(&[todo(1, "A", false)]);
        assert_eq!(view.total_label, "1 task");
        assert_eq!(view.completed_label, "0 completed");
    }

    #[test]
    fn plural_total_and_completed_count() {
        let items = [todo(1, "A", true), todo(2, "B", false), todo(3, "C", true)];
        let view = project(&items);
        assert_eq!(view.total_label, "3 tasks");
        assert_eq!(view.completed_label, "2 completed");
        assert!(!view.is_empty());
    }

    #[test]
    fn rows_follow_sequence_order() {
        let items = [todo(9, "first", false), todo(3, "second", true)];
        let view = project(&items);
        assert_eq!(view.rows[0].id, 9);
        assert_eq!(view.rows[1].id, 3);
        assert!(view.rows[1].completed);
    }

    #[test]
    fn script_tag_is_escaped_to_literal_text() {
        let view = project(&[todo(1, "<script>alert('x')</script>", false)]);
        assert_eq!(
            view.rows[0].title_html,
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(view.rows[0].title, "<script>alert('x')</script>");
    }

    #[test]
    fn ampersand_is_escaped_first() {
        assert_eq!(escape_html("a & b < c"), "a &amp; b &lt; c");
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }
}
