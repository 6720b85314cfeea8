use anyhow::{Context, Result};
use chrono::Local;
use std::fs;

use cvgen::html;
use cvgen::i18n::{Lang, Locale};
use cvgen::profile::Profile;

fn main() -> Result<()> {
    // Capture "today" once so every figure on every page agrees on it.
    let today = Local::now().date_naive();
    let profile = Profile::data();

    for lang in Lang::ALL {
        let locale =
            Locale::load(lang).with_context(|| format!("loading {} locale", lang.code()))?;
        let page = html::render_page(&profile, &locale, today)
            .with_context(|| format!("rendering the {} page", lang.code()))?;
        fs::write(lang.page_file(), page)
            .with_context(|| format!("writing {}", lang.page_file()))?;
        println!("Generated {} successfully.", lang.page_file());
    }

    Ok(())
}
