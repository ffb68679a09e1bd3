//! Sequence summary command

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use std::path::PathBuf;

use ue_anim_notify::{
    AnimSequenceInfo, ExportDocument, ExtractOptions, WEAPON_SOUND_NOTIFY, WEAPON_SOUND_TYPE,
    extract_sound_events_with,
};

use crate::utils::{notifies_table, sound_events_table};

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Path to the JSON export
    pub file: PathBuf,

    /// List every notify of the sequence, not only sound events
    #[arg(short, long)]
    pub all: bool,

    /// NotifyName of the events to resolve
    #[arg(short, long, default_value = WEAPON_SOUND_NOTIFY)]
    pub notify_name: String,
}

pub fn execute(args: InfoArgs) -> Result<()> {
    let document = ExportDocument::from_path(&args.file)
        .with_context(|| format!("Failed to load export: {}", args.file.display()))?;

    let (object, props) = document
        .anim_sequence()
        .with_context(|| format!("Failed to read sequence: {}", args.file.display()))?;
    let info = AnimSequenceInfo::from_properties(object.name.clone(), &props)?;

    let options = ExtractOptions {
        notify_name: args.notify_name.clone(),
    };
    let rows = extract_sound_events_with(&document, &options)?;
    let sound_objects = document.objects_of_type(WEAPON_SOUND_TYPE).count();

    println!("{}", style("Animation Sequence").bold().underlined());
    println!("  File:            {}", style(args.file.display()).cyan());
    println!(
        "  Name:            {}",
        style(info.name.as_deref().unwrap_or("<unnamed>")).yellow()
    );
    println!("  Frames:          {}", info.num_frames);
    println!("  Length:          {}s", info.sequence_length);
    println!("  Frame rate:      {} fps", info.fps);
    println!("  Notifies:        {}", props.notifies.len());
    println!("  {:<16} {}", format!("{}:", args.notify_name), rows.len());
    println!("  Sound objects:   {sound_objects}");
    println!();

    if args.all && !props.notifies.is_empty() {
        println!("{}", style("Notifies").bold());
        notifies_table(&props.notifies, &info).printstd();
        println!();
    }

    if rows.is_empty() {
        println!(
            "{}",
            style(format!("No {} notifies found", args.notify_name)).yellow()
        );
    } else {
        println!("{}", style("Sound Events").bold());
        sound_events_table(&rows).printstd();
    }

    Ok(())
}
