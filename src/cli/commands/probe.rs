use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::prober::{BUILTIN_VIDEO_TYPES, CodecProber};
use crate::errors::AppResult;
use crate::export::json::codec_report_to_json;
use crate::platform::audio::InProcessAudioBackend;
use crate::platform::support::StaticTypeSupport;
use crate::ui::messages::{header, info, warning};
use crate::utils::table::Table;
use std::fs;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Probe {
        codec_file,
        caps_file,
        json,
    } = cmd
    {
        let caps = match caps_file {
            Some(path) => {
                let content = fs::read_to_string(path)?;
                StaticTypeSupport::new(content.lines().filter(|l| !l.trim().is_empty()))
            }
            None => StaticTypeSupport::new(&cfg.supported_types),
        };

        let mut prober = CodecProber::new(
            Box::new(caps),
            Box::new(InProcessAudioBackend),
            cfg.custom_codecs.clone(),
        );

        match codec_file {
            Some(path) => prober.upload_custom_codec(Path::new(path))?,
            None => prober.detect()?,
        };

        if *json {
            println!("{}", codec_report_to_json(prober.report())?);
            return Ok(());
        }

        render_report(&prober);
    }
    Ok(())
}

fn render_report(prober: &CodecProber) {
    let report = prober.report();

    header("Supported Codecs");
    if report.supported.is_empty() {
        warning("No codecs supported");
    } else {
        let mut table = Table::auto(&["type", "supported"]);
        for t in BUILTIN_VIDEO_TYPES
            .iter()
            .map(|s| s.to_string())
            .chain(prober.custom_codecs().iter().cloned())
        {
            let ok = report.supported.contains(&t);
            table.add_row(vec![t, if ok { "yes" } else { "no" }.to_string()]);
        }
        print!("{}", table.render());
    }

    if report.ac3_supported {
        info("AC-3 is supported.");
    }
    if report.eac3_supported {
        info("E-AC-3 is supported.");
    }
    if prober.has_software_fallback() {
        info("Software decoder fallback installed (inert passthrough).");
    }
}
