use axum::http::StatusCode;

use super::{escape_html, layout};
use crate::profiles::Profile;
use crate::session::Structure;

/// One form button on a structure page.
struct Control {
    label: &'static str,
    action: &'static str,
    /// Present when the operation needs an item.
    placeholder: Option<&'static str>,
}

struct PageContent {
    title: &'static str,
    description: &'static str,
    controls: &'static [Control],
}

const QUEUE_PAGE: PageContent = PageContent {
    title: "Queue (Linked List)",
    description: "FIFO: First element in is the first element out.",
    controls: &[
        Control {
            label: "Enqueue (Rear)",
            action: "enqueue",
            placeholder: Some("Item to add"),
        },
        Control {
            label: "Dequeue (Front)",
            action: "dequeue",
            placeholder: None,
        },
    ],
};

const DEQUE_PAGE: PageContent = PageContent {
    title: "Deque (Doubly Linked List)",
    description: "Allows insertion and deletion from both the front and rear.",
    controls: &[
        Control {
            label: "Insert Front",
            action: "insert_front",
            placeholder: Some("Item to add"),
        },
        Control {
            label: "Insert Rear",
            action: "insert_rear",
            placeholder: Some("Item to add"),
        },
        Control {
            label: "Delete Front",
            action: "delete_front",
            placeholder: None,
        },
        Control {
            label: "Delete Rear",
            action: "delete_rear",
            placeholder: None,
        },
    ],
};

const fn page_content(structure: Structure) -> &'static PageContent {
    match structure {
        Structure::Queue => &QUEUE_PAGE,
        Structure::Deque => &DEQUE_PAGE,
    }
}

pub fn index_page() -> String {
    let body = "<h1>Linked Data Structures</h1>\
<p>Pick a structure to experiment with. Its contents are kept for the rest of your session.</p>\
<ul>\
<li><a href=\"/queue\">Queue (Linked List)</a></li>\
<li><a href=\"/deque\">Deque (Doubly Linked List)</a></li>\
<li><a href=\"/profiles\">Group Profiles</a></li>\
</ul>";
    layout("Linked Data Structures", body)
}

/// Renders a structure with its elements front to rear and one form per operation.
pub fn structure_page(structure: Structure, elements: &[String], message: Option<&str>) -> String {
    let content = page_content(structure);
    let path = structure.path();
    let mut body = format!(
        "<h1>{}</h1><p class=\"info\">{}</p>",
        escape_html(content.title),
        escape_html(content.description)
    );

    if let Some(message) = message {
        body.push_str(&format!(
            "<p class=\"message\">{}</p>",
            escape_html(message)
        ));
    }

    if elements.is_empty() {
        body.push_str("<p class=\"empty\">The structure is empty.</p>");
    } else {
        body.push_str(&format!(
            "<p class=\"ends\">Front &rarr; Rear ({} items)</p><ol class=\"elements\">",
            elements.len()
        ));
        for element in elements {
            body.push_str(&format!("<li>{}</li>", escape_html(element)));
        }
        body.push_str("</ol>");
    }

    body.push_str("<section class=\"operations\">");
    for control in content.controls {
        body.push_str(&format!(
            "<form method=\"post\" action=\"{path}\"><input type=\"hidden\" name=\"action\" value=\"{}\">",
            control.action
        ));
        if let Some(placeholder) = control.placeholder {
            body.push_str(&format!(
                "<input type=\"text\" name=\"item\" placeholder=\"{}\" required>",
                escape_html(placeholder)
            ));
        }
        body.push_str(&format!(
            "<button type=\"submit\">{}</button></form>",
            escape_html(control.label)
        ));
    }
    body.push_str("</section>");

    layout(content.title, &body)
}

pub fn profiles_page(members: &[Profile]) -> String {
    let mut body = String::from("<h1>Group Profiles</h1><section class=\"profiles\">");
    for member in members {
        body.push_str(&format!(
            "<article id=\"{}\"><h2>{}</h2><p>{}</p></article>",
            escape_html(member.id),
            escape_html(member.name),
            escape_html(member.bio)
        ));
    }
    body.push_str("</section>");
    layout("Group Profiles", &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let heading = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    let body = format!(
        "<h1>{}</h1><p>{}</p><p><a href=\"/\">Back to start</a></p>",
        escape_html(&heading),
        escape_html(message)
    );
    layout(&heading, &body)
}
