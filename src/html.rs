//! Renders the complete CV page for one language.
//!
//! The page is rebuilt from scratch on every call from (profile, locale,
//! today); there is no incremental patching, so rendering twice with the
//! same `today` produces byte-identical output. The per-role duration
//! phrase is emitted as the date element's `title` attribute, which is the
//! hover tooltip in every browser.

use chrono::NaiveDate;

use crate::duration::{compute_duration, format_duration};
use crate::experience::{compute_experience, format_experience_figure, render_summary};
use crate::i18n::{Lang, Locale, LocaleError};
use crate::profile::{Profile, Role};

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn build_lang_switcher(active: Lang) -> String {
    let mut out = String::from("<nav class=\"lang-switcher\">\n");
    for lang in Lang::ALL {
        let class = if lang == active {
            "lang-btn active"
        } else {
            "lang-btn"
        };
        out.push_str(&format!(
            "  <a class=\"{class}\" href=\"{}\" lang=\"{}\">{}</a>\n",
            lang.page_file(),
            lang.code(),
            escape_html(lang.display_name())
        ));
    }
    out.push_str("</nav>\n");
    out
}

fn build_summary(
    profile: &Profile,
    locale: &Locale,
    today: NaiveDate,
) -> Result<String, LocaleError> {
    let heading = escape_html(locale.get("summary.heading")?);
    let template = locale.get("summary.text")?;

    // A future anchor cannot produce a figure; drop the paragraph rather
    // than render a template with a dangling placeholder.
    let text = match compute_experience(profile.experience_anchor, today) {
        Ok((years, months)) => {
            let figure = format_experience_figure(years, months);
            escape_html(&render_summary(template, &figure))
        }
        Err(err) => {
            eprintln!("skipping summary figure: {err}");
            return Ok(format!("<section class=\"summary\">\n  <h2>{heading}</h2>\n</section>\n"));
        }
    };

    Ok(format!(
        "<section class=\"summary\">\n  <h2>{heading}</h2>\n  <p>{text}</p>\n</section>\n"
    ))
}

fn build_role(role: &Role, locale: &Locale, today: NaiveDate) -> Result<String, LocaleError> {
    let title = escape_html(locale.get(&format!("{}.title", role.key))?);
    let company = escape_html(locale.get(&format!("{}.company", role.key))?);
    let period = escape_html(locale.get(&format!("{}.period", role.key))?);
    let description = escape_html(locale.get(&format!("{}.description", role.key))?);

    // The duration tooltip rides on the date element. A reversed range is a
    // data error: keep the visible dates, drop only the tooltip.
    let (start, end) = role.dates.resolve(today);
    let date_span = match compute_duration(start, end) {
        Ok(d) => format!(
            "<span class=\"experience-date\" title=\"{}\">{period}</span>",
            escape_html(&format_duration(&d))
        ),
        Err(err) => {
            eprintln!("skipping duration tooltip for {}: {err}", role.key);
            format!("<span class=\"experience-date\">{period}</span>")
        }
    };

    Ok(format!(
        "  <article class=\"role\">\n    <h3>{title} — {company}</h3>\n    {date_span}\n    <p>{description}</p>\n  </article>\n"
    ))
}

fn build_experience(
    profile: &Profile,
    locale: &Locale,
    today: NaiveDate,
) -> Result<String, LocaleError> {
    // The section is a collapsible box, closed by default (no `open`
    // attribute); <details> gives the toggle without any scripting.
    let heading = escape_html(locale.get("experience.heading")?);
    let mut out = format!(
        "<section class=\"experience\">\n<details class=\"accordion-box\">\n  <summary class=\"accordion-header\"><h2>{heading}</h2></summary>\n"
    );
    for role in &profile.roles {
        out.push_str(&build_role(role, locale, today)?);
    }
    out.push_str("</details>\n</section>\n");
    Ok(out)
}

fn build_plain_section(
    locale: &Locale,
    class: &str,
    heading_key: &str,
    text_key: &str,
) -> Result<String, LocaleError> {
    let heading = escape_html(locale.get(heading_key)?);
    let text = escape_html(locale.get(text_key)?);
    Ok(format!(
        "<section class=\"{class}\">\n  <h2>{heading}</h2>\n  <p>{text}</p>\n</section>\n"
    ))
}

/// Builds the full HTML document for `locale`'s language.
pub fn render_page(
    profile: &Profile,
    locale: &Locale,
    today: NaiveDate,
) -> Result<String, LocaleError> {
    let lang = locale.lang();
    let title = escape_html(locale.get("title")?);
    let name = escape_html(profile.name);

    let mut body = String::new();
    body.push_str(&build_lang_switcher(lang));
    body.push_str(&format!("<header>\n  <h1>{name}</h1>\n</header>\n"));
    body.push_str(&build_summary(profile, locale, today)?);
    body.push_str(&build_experience(profile, locale, today)?);
    body.push_str(&build_plain_section(locale, "skills", "skills.heading", "skills.text")?);
    body.push_str(&build_plain_section(
        locale,
        "contact",
        "contact.heading",
        "contact.email",
    )?);
    body.push_str(&format!(
        "<footer>\n  <p>{}</p>\n</footer>\n",
        escape_html(locale.get("footer.note")?)
    ));

    Ok(format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n{body}</body>\n</html>\n",
        lang.code()
    ))
}
