use std::path::PathBuf;

use log::{debug, error, info};

use crate::cli::types::Commands;
use crate::config::{self, Config};
use crate::page;
use crate::toc;
use crate::utils::error::{BoxResult, WikitocError};
use crate::utils::fs::write_file;
use crate::wiki::{self, WikiClient};

pub async fn handle_fetch_command(command: &Commands, config_file: Option<&PathBuf>) {
    if let Commands::Fetch {
        query,
        language,
        output,
        console,
    } = command
    {
        let config = match config::load_config(config_file) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Failed to load config: {}", e);
                return;
            }
        };

        let language = language
            .clone()
            .unwrap_or_else(|| config.default_language.clone());
        let rtl = wiki::is_rtl(&language, &config.rtl_languages);
        let output = output.clone().unwrap_or_else(|| config.output.clone());

        match fetch_and_render(&config, query, &language, rtl, *console, &output).await {
            Ok(()) => {}
            Err(e) => {
                error!("{}", e);
                // In file mode the failure is also shown where the result
                // would have been
                if !*console {
                    let error_page = page::generate_error_page(&e.to_string(), &language, rtl);
                    if let Err(write_err) = write_file(&output, &error_page) {
                        error!(
                            "Failed to write error page to {}: {}",
                            output.display(),
                            write_err
                        );
                    }
                }
            }
        }
    }
}

async fn fetch_and_render(
    config: &Config,
    query: &str,
    language: &str,
    rtl: bool,
    console: bool,
    output: &PathBuf,
) -> BoxResult<()> {
    // Caller input is checked before any fetch happens
    if query.trim().is_empty() {
        return Err(WikitocError::Input("Please input the search query".into()).into());
    }
    if language.trim().is_empty() {
        return Err(WikitocError::Input("Please select the language to search".into()).into());
    }

    let client = WikiClient::new(config)?;
    info!("Fetching table of contents for {:?} ({})", query, language);

    let payload = client.fetch_toc(language, query).await?;
    debug!("Received {} entries", payload.entries.len());

    let tree = toc::build_tree(&payload.entries, payload.title.clone());
    let article_url = client.article_url(language, query);

    if console {
        print!("{}", page::generate_console_listing(&tree));
    } else {
        let html = page::generate_toc_page(&tree, &article_url, language, rtl);
        write_file(output, &html)?;
        info!("Wrote table of contents to {}", output.display());
    }

    Ok(())
}
