use axum::response::Html;

use super::{approval_path, layout, notice, status_badge, text, url};
use crate::domains::stories::{is_web_link, StoryReview};
use crate::domains::tally::Decision;
use crate::server::forms::DecisionForm;

/// Approval page for one story
pub fn approval_page(review: &StoryReview, form: &DecisionForm, flash: Option<String>) -> Html<String> {
    let story = &review.story;
    let mut body = String::from("<h1>Aprovação de Histórias de Usuário</h1>\n");

    body.push_str(&format!(
        "<h2>{} - {}</h2>\n<p>Projeto: {} &middot; Status: {}</p>\n",
        text(story.id.as_str()),
        text(&story.title),
        text(&story.project),
        status_badge(review.status),
    ));

    if let Some(flash) = flash {
        body.push_str(&flash);
    }

    body.push_str("<p>");
    for decision in Decision::ALL {
        body.push_str(&format!(
            "{}: {} &nbsp; ",
            text(decision.label()),
            review.tally.count(decision)
        ));
    }
    body.push_str("</p>\n");

    body.push_str(&decision_form(review, form));
    body.push_str(&history(review));

    if is_web_link(&story.document_link) {
        body.push_str(&format!(
            r#"<iframe src="{}" width="100%" height="600px"></iframe>"#,
            url(&story.document_link)
        ));
    } else {
        // Rows edited by hand can carry any scheme; those are never embedded
        body.push_str(&notice(
            "warning",
            &format!("⚠️ Link do documento inválido: {}", story.document_link),
        ));
    }

    layout(&format!("{} - {}", story.id, story.title), &body)
}

fn decision_form(review: &StoryReview, form: &DecisionForm) -> String {
    let selected = form.selected();
    let options: String = Decision::ALL
        .iter()
        .map(|decision| {
            format!(
                r#"<label><input type="radio" name="decision" value="{}"{} required> {}</label>"#,
                decision.as_str(),
                if selected == Some(*decision) { " checked" } else { "" },
                text(decision.action_label()),
            )
        })
        .collect();

    format!(
        r#"<form method="post" action="{action}">
<div class="decisions">{options}</div>
<label>Digite seu nome: <input type="text" name="voter_name" value="{voter}" required></label>
<label>Adicione uma observação (opcional): <textarea name="comment" rows="3">{comment}</textarea></label>
<button type="submit">Confirmar ação</button>
</form>
"#,
        action = text(&approval_path(&review.story.id)),
        voter = text(&form.voter_name),
        comment = text(&form.comment),
    )
}

fn history(review: &StoryReview) -> String {
    if review.votes.is_empty() {
        return "<p><em>Nenhuma decisão registrada ainda.</em></p>\n".to_string();
    }

    let mut out = String::from("<h3>Decisões registradas</h3>\n<ul>\n");
    for vote in &review.votes {
        out.push_str(&format!(
            "<li><strong>{}</strong>: {}",
            text(&vote.voter),
            text(vote.decision.label())
        ));
        if let Some(comment) = &vote.comment {
            out.push_str(&format!(" &mdash; {}", text(comment)));
        }
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n");
    out
}
