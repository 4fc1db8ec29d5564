//! Tabbed comparison rendering
//!
//! Composes an aligned comparison index into one self-contained static
//! document: one tab per clause title, one comparison block per paragraph
//! position, one row per jurisdiction. Pipeline: index → DOM tree →
//! serialized markup → wrapped document with embedded styling and the
//! tab-switch script. Tab switching is a pure display toggle; nothing is
//! recomputed client-side.

use crate::error::RenderError;
use html5ever::{serialize, serialize::SerializeOpts, serialize::TraversalScope};
use markup5ever_rcdom::SerializableHandle;
use ordin_compare::{diff_spans, split_item_number, ComparisonIndex, DiffSpan};
use ordin_parser::dom::{append, element, text, Fragment};
use ordin_parser::JurisdictionEntry;

/// Row label shown for a jurisdiction whose document was not found.
pub const NOT_FOUND_LABEL: &str = "조례 없음";

/// Render the comparison index to a complete static document.
pub fn render(index: &ComparisonIndex) -> Result<String, RenderError> {
    let container = build_container(index);
    let body = serialize_fragment(&container)?;
    Ok(wrap_in_document(&body))
}

/// Build the document body: heading, tab bar, and one pane per clause.
fn build_container(index: &ComparisonIndex) -> Fragment {
    let container = element("div", vec![("class", "comparison")]);

    let heading = element("h1", vec![]);
    append(&heading, &text("시군구별 조례 비교"));
    append(&container, &heading);

    let subtitle = element("p", vec![("class", "subtitle")]);
    append(&subtitle, &text("조항별 내용 비교 및 차이점 분석"));
    append(&container, &subtitle);

    let tabs = element("div", vec![("class", "tabs")]);
    for (position, title) in index.ordered_titles.iter().enumerate() {
        let class = if position == 0 {
            "tab-button active"
        } else {
            "tab-button"
        };
        let handler = format!("openTab(event, 'tab-{}')", position);
        let button = element(
            "button",
            vec![("class", class), ("onclick", handler.as_str())],
        );
        append(&button, &text(title));
        append(&tabs, &button);
    }
    append(&container, &tabs);

    for (position, title) in index.ordered_titles.iter().enumerate() {
        append(&container, &build_tab(index, position, title));
    }

    container
}

/// Build one clause pane: paragraph comparison blocks for every
/// jurisdiction holding a document, then a single not-found row per
/// absent jurisdiction.
fn build_tab(index: &ComparisonIndex, position: usize, title: &str) -> Fragment {
    let id = format!("tab-{}", position);
    let class = if position == 0 {
        "tab-content active"
    } else {
        "tab-content"
    };
    let pane = element("div", vec![("id", id.as_str()), ("class", class)]);

    let base_entry = index.jurisdictions.iter().next();
    for paragraph_idx in 0..paragraph_count(index, title) {
        let section = element("div", vec![("class", "paragraph-section")]);
        let section_title = element("div", vec![("class", "paragraph-title")]);
        let label = if paragraph_idx == 0 {
            "조항 제목".to_string()
        } else {
            format!("항목 {}", paragraph_idx)
        };
        append(&section_title, &text(&label));
        append(&section, &section_title);

        let base_text = base_entry
            .map(|entry| paragraph_text(entry, title, paragraph_idx))
            .unwrap_or_default();

        for entry in index.jurisdictions.iter() {
            if entry.document.is_none() {
                continue;
            }
            let own_text = paragraph_text(entry, title, paragraph_idx);
            let is_base = base_entry.map(|base| base.name == entry.name).unwrap_or(false);
            let spans = if is_base {
                // The base is the reference; it renders unhighlighted.
                vec![DiffSpan::Equal(own_text)]
            } else {
                diff_spans(&base_text, &own_text)
            };
            append(&section, &build_row(&entry.name, &spans));
        }

        append(&pane, &section);
    }

    let absent: Vec<&JurisdictionEntry> = index
        .jurisdictions
        .iter()
        .filter(|entry| entry.document.is_none())
        .collect();
    if !absent.is_empty() {
        let section = element("div", vec![("class", "paragraph-section")]);
        for entry in absent {
            let spans = vec![DiffSpan::Equal(NOT_FOUND_LABEL.to_string())];
            append(&section, &build_row(&entry.name, &spans));
        }
        append(&pane, &section);
    }

    pane
}

/// One comparison row: jurisdiction name beside its paragraph content.
fn build_row(name: &str, spans: &[DiffSpan]) -> Fragment {
    let row = element("div", vec![("class", "diff-row")]);

    let city = element("div", vec![("class", "city-column")]);
    append(&city, &text(name));
    append(&row, &city);

    let content = element("div", vec![("class", "content-column")]);
    append_spans(&content, spans);
    append(&row, &content);

    row
}

/// Attach diff spans as text and highlight elements. A numeric item
/// marker leading an unchanged run is re-wrapped in the item-number
/// marker, once.
fn append_spans(parent: &Fragment, spans: &[DiffSpan]) {
    let mut leading_handled = false;
    if let Some(DiffSpan::Equal(run)) = spans.first() {
        if let Some((marker, rest)) = split_item_number(run) {
            let item = element("span", vec![("class", "item-num")]);
            append(&item, &text(marker));
            append(parent, &item);
            if !rest.is_empty() {
                append(parent, &text(rest));
            }
            leading_handled = true;
        }
    }

    for (position, span) in spans.iter().enumerate() {
        if position == 0 && leading_handled {
            continue;
        }
        match span {
            DiffSpan::Equal(run) => append(parent, &text(run)),
            DiffSpan::Changed(run) => {
                let mark = element("span", vec![("class", "diff")]);
                append(&mark, &text(run));
                append(parent, &mark);
            }
        }
    }
}

/// Comparison blocks per clause: the widest paragraph list over all
/// documents holding the clause.
fn paragraph_count(index: &ComparisonIndex, title: &str) -> usize {
    index
        .jurisdictions
        .iter()
        .filter_map(|entry| entry.document.as_ref())
        .filter_map(|document| document.clauses.get(title))
        .map(|clause| clause.paragraphs.len())
        .max()
        .unwrap_or(0)
}

/// A jurisdiction's paragraph at one position; absent paragraphs compare
/// as empty.
fn paragraph_text(entry: &JurisdictionEntry, title: &str, paragraph_idx: usize) -> String {
    entry
        .document
        .as_ref()
        .and_then(|document| document.clauses.get(title))
        .and_then(|clause| clause.paragraphs.get(paragraph_idx))
        .cloned()
        .unwrap_or_default()
}

/// Serialize a DOM fragment, including the node itself.
fn serialize_fragment(fragment: &Fragment) -> Result<String, RenderError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };
    let serializable = SerializableHandle::from(fragment.as_handle());
    serialize(&mut output, &serializable, opts)
        .map_err(|e| RenderError::Serialization(format!("markup serialization failed: {}", e)))?;
    String::from_utf8(output)
        .map_err(|e| RenderError::Serialization(format!("UTF-8 conversion failed: {}", e)))
}

/// Wrap the serialized body in a complete document with embedded CSS and
/// the tab-switch script.
fn wrap_in_document(body_html: &str) -> String {
    let css = include_str!("../css/report.css");
    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="ordin-report">
  <title>시군구별 조례 비교</title>
  <style>
{}
  </style>
</head>
<body>
{}
<script>
{}
</script>
</body>
</html>"#,
        css, body_html, TAB_SCRIPT
    )
}

/// Display-state toggle only; no data is recomputed on switch.
const TAB_SCRIPT: &str = r#"function openTab(evt, tabId) {
    var contents = document.getElementsByClassName("tab-content");
    for (var i = 0; i < contents.length; i++) {
        contents[i].className = contents[i].className.replace(" active", "");
    }
    var buttons = document.getElementsByClassName("tab-button");
    for (var i = 0; i < buttons.length; i++) {
        buttons[i].className = buttons[i].className.replace(" active", "");
    }
    document.getElementById(tabId).className += " active";
    evt.currentTarget.className += " active";
}"#;
