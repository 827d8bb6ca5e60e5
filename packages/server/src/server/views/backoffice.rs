use axum::response::Html;

use super::{approval_path, layout, notice, status_badge, text};
use crate::domains::stories::StorySummary;
use crate::server::forms::RegisterStoryForm;

/// Backoffice: registration form followed by the list of stories
pub fn backoffice_page(
    stories: &[StorySummary],
    form: &RegisterStoryForm,
    flash: Option<String>,
) -> Html<String> {
    let mut body = String::from("<h1>Backoffice de HUs</h1>\n");
    if let Some(flash) = flash {
        body.push_str(&flash);
    }

    body.push_str(&registration_form(form));

    body.push_str("<h2>Lista de HUs para aprovação</h2>\n");
    if stories.is_empty() {
        body.push_str(&notice(
            "warning",
            "⚠️ A planilha está vazia. Adicione dados antes de continuar.",
        ));
    } else {
        for summary in stories {
            body.push_str(&story_entry(summary));
        }
    }

    layout("Backoffice de HUs", &body)
}

fn registration_form(form: &RegisterStoryForm) -> String {
    format!(
        r#"<h2>Registrar HU</h2>
<form method="post" action="/backoffice/stories">
<label>ID da HU <input type="text" name="id" value="{id}" required></label>
<label>Título <input type="text" name="title" value="{title}" required></label>
<label>Projeto <input type="text" name="project" value="{project}" required></label>
<label>Link do documento <input type="url" name="link" value="{link}" required></label>
<label>Responsável (opcional) <input type="text" name="owner" value="{owner}"></label>
<button type="submit">Registrar</button>
</form>
"#,
        id = text(&form.id),
        title = text(&form.title),
        project = text(&form.project),
        link = text(&form.link),
        owner = text(&form.owner),
    )
}

fn story_entry(summary: &StorySummary) -> String {
    let story = &summary.story;
    let project = if story.project.is_empty() {
        String::new()
    } else {
        format!(" <small>({})</small>", text(&story.project))
    };
    let badge = match &summary.vote_error {
        Some(error) => notice("error", &format!("🚨 {}", error)),
        None => status_badge(summary.status),
    };

    format!(
        r#"<div class="story">
<strong>ID:</strong> {id} - <strong>{title}</strong>{project} {badge}
<small>{votes} voto(s)</small><br>
<a href="{href}">Ver detalhes</a>
</div>
"#,
        id = text(story.id.as_str()),
        title = text(&story.title),
        votes = summary.tally.total(),
        href = text(&approval_path(&story.id)),
    )
}
