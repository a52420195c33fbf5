//! Batch generation command

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use tokio::sync::watch;

use crate::batch::{BatchPhase, BatchPlan, BatchProgress};
use crate::cli::output::{OutputFormat, print_error, print_status, write_formatted};
use crate::client::GenerationClient;
use crate::clipboard::{self, ClipboardError};
use crate::config::{ComposerConfig, Config};
use crate::request::PostOptions;
use crate::selection::{Category, Selection, label_for};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// What the posts should be about
    #[arg(short, long)]
    pub topic: String,

    /// Target platform id (see `scribe presets`)
    #[arg(short, long)]
    pub platform: String,

    /// Template id
    #[arg(long)]
    pub template: Option<String>,

    /// Tone id
    #[arg(long)]
    pub tone: Option<String>,

    /// Approximate words per post
    #[arg(short, long)]
    pub words: Option<u32>,

    /// Include hashtags
    #[arg(long, overrides_with = "no_hashtags")]
    pub hashtags: bool,

    /// Leave hashtags out
    #[arg(long, overrides_with = "hashtags")]
    pub no_hashtags: bool,

    /// Include emojis
    #[arg(long, overrides_with = "no_emojis")]
    pub emojis: bool,

    /// Leave emojis out
    #[arg(long, overrides_with = "emojis")]
    pub no_emojis: bool,

    /// Number of posts to generate
    #[arg(short = 'n', long)]
    pub count: Option<u32>,

    /// Copy all posts to the clipboard afterwards
    #[arg(long)]
    pub copy: bool,

    /// Override the configured service endpoint
    #[arg(long)]
    pub endpoint: Option<String>,
}

impl GenerateArgs {
    fn selection(&self) -> Selection {
        let mut selection = Selection::default();
        selection.select(Category::Platform, self.platform.as_str());
        if let Some(template) = &self.template {
            selection.select(Category::Template, template.as_str());
        }
        if let Some(tone) = &self.tone {
            selection.select(Category::Tone, tone.as_str());
        }
        selection
    }

    fn options(&self, defaults: &ComposerConfig) -> PostOptions {
        PostOptions {
            word_count: defaults.clamp_word_count(self.words.unwrap_or(defaults.word_count)),
            include_hashtags: flag(self.hashtags, self.no_hashtags, defaults.include_hashtags),
            include_emojis: flag(self.emojis, self.no_emojis, defaults.include_emojis),
        }
    }
}

/// Resolve a `--x` / `--no-x` pair against the configured default
fn flag(on: bool, off: bool, default: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (false, true) => false,
        (false, false) => default,
    }
}

#[derive(Serialize)]
struct BatchReport {
    topic: String,
    platform: String,
    template: Option<String>,
    tone: Option<String>,
    word_count: u32,
    posts: Vec<String>,
    generated_at: DateTime<Utc>,
}

pub async fn run(args: GenerateArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(endpoint) = &args.endpoint {
        config.service.endpoint = endpoint.clone();
    }

    let options = args.options(&config.composer);
    let count = config
        .composer
        .clamp_post_count(args.count.unwrap_or(config.composer.post_count));
    let plan = BatchPlan::new(&args.topic, &args.selection(), &options, count)?;
    let request = plan.request().clone();

    let client = GenerationClient::new(&config.service)?;
    tracing::debug!("Posting to {}", client.endpoint());
    print_status(
        &format!(
            "Generating {} post(s) for {}",
            count,
            label_for(Category::Platform, &request.platform)
        ),
        quiet,
    );

    let (progress_tx, mut progress_rx) = watch::channel(BatchProgress::default());
    let reporter = tokio::spawn(async move {
        while progress_rx.changed().await.is_ok() {
            let progress = progress_rx.borrow_and_update().clone();
            if progress.phase == BatchPhase::InFlight {
                print_status(&progress.label(), quiet);
            }
        }
    });

    let result = plan.run(&client, &progress_tx).await;
    drop(progress_tx);
    let _ = reporter.await;

    let posts = result.map_err(|e| anyhow::anyhow!("Failed to generate post: {}", e))?;

    let report = BatchReport {
        topic: request.topic,
        platform: request.platform,
        template: request.template,
        tone: request.tone,
        word_count: request.word_count,
        posts,
        generated_at: Utc::now(),
    };

    deliver(
        &mut std::io::stdout().lock(),
        &report,
        format,
        quiet,
        args.copy.then_some(clipboard::copy_posts::<String>),
    )
}

/// Print the report, then hand the posts to `copy` if one is given.
///
/// The posts are written before the clipboard is touched. A failed copy is
/// reported on stderr and does not fail the command.
fn deliver<W, C>(
    out: &mut W,
    report: &BatchReport,
    format: OutputFormat,
    quiet: bool,
    copy: Option<C>,
) -> Result<()>
where
    W: Write,
    C: FnOnce(&[String]) -> Result<usize, ClipboardError>,
{
    write_formatted(out, report, format, |r| clipboard::aggregate(&r.posts))?;

    if let Some(copy) = copy {
        match copy(&report.posts) {
            Ok(_) => print_status("All posts copied to clipboard!", quiet),
            Err(e) => {
                tracing::warn!("Failed to copy posts: {}", e);
                print_error(&e.to_string());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: GenerateArgs,
    }

    fn parse(argv: &[&str]) -> GenerateArgs {
        let mut full = vec!["scribe"];
        full.extend_from_slice(argv);
        TestCli::try_parse_from(full).unwrap().args
    }

    #[test]
    fn test_flags_fall_back_to_config() {
        let args = parse(&["--topic", "coffee", "--platform", "twitter"]);
        let defaults = ComposerConfig::default();
        let options = args.options(&defaults);

        assert_eq!(options.word_count, 50);
        assert!(options.include_hashtags);
        assert!(!options.include_emojis);
    }

    #[test]
    fn test_flags_override_config() {
        let args = parse(&[
            "-t", "coffee", "-p", "twitter", "--no-hashtags", "--emojis", "--words", "900",
        ]);
        let options = args.options(&ComposerConfig::default());

        assert!(!options.include_hashtags);
        assert!(options.include_emojis);
        assert_eq!(options.word_count, 300);
    }

    #[test]
    fn test_last_toggle_flag_wins() {
        let defaults = ComposerConfig::default();

        let on = parse(&["-t", "coffee", "-p", "twitter", "--no-hashtags", "--hashtags"]);
        assert!(on.options(&defaults).include_hashtags);

        let off = parse(&["-t", "coffee", "-p", "twitter", "--emojis", "--no-emojis"]);
        assert!(!off.options(&defaults).include_emojis);

        let on = parse(&["-t", "coffee", "-p", "twitter", "--no-emojis", "--emojis"]);
        assert!(on.options(&defaults).include_emojis);
    }

    fn report() -> BatchReport {
        BatchReport {
            topic: "coffee".to_string(),
            platform: "twitter".to_string(),
            template: None,
            tone: Some("funny".to_string()),
            word_count: 50,
            posts: vec!["Post A".to_string(), "Post B".to_string()],
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_posts_are_printed_when_copy_fails() {
        let mut out = Vec::new();
        let mut attempted = false;

        deliver(
            &mut out,
            &report(),
            OutputFormat::Text,
            true,
            Some(|_: &[String]| {
                attempted = true;
                Err(ClipboardError::Unavailable("no display".to_string()))
            }),
        )
        .unwrap();

        assert!(attempted);
        assert_eq!(String::from_utf8(out).unwrap(), "Post A\n\n---\n\nPost B\n");
    }

    #[test]
    fn test_json_report_lists_posts() {
        let mut out = Vec::new();
        deliver(
            &mut out,
            &report(),
            OutputFormat::Json,
            true,
            None::<fn(&[String]) -> Result<usize, ClipboardError>>,
        )
        .unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["posts"], serde_json::json!(["Post A", "Post B"]));
        assert_eq!(json["tone"], "funny");
    }

    #[test]
    fn test_selection_from_args() {
        let args = parse(&["-t", "coffee", "-p", "linkedin", "--tone", "funny"]);
        let selection = args.selection();

        assert_eq!(selection.platform(), Some("linkedin"));
        assert_eq!(selection.tone(), Some("funny"));
        assert_eq!(selection.template(), None);
    }

    #[test]
    fn test_flag_resolution() {
        assert!(flag(true, false, false));
        assert!(!flag(false, true, true));
        assert!(flag(false, false, true));
        assert!(!flag(false, false, false));
    }
}
