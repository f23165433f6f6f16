//! The audio host's option table.

use crate::options::entry::{ArgumentArity, OptionEntry, ValueKind};
use crate::options::error::OptionsError;
use crate::options::registry::OptionRegistry;

/// Index of each option in the table built by [`app_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppOption {
    Help,
    Version,
    Input,
    Output,
    Plugin,
    PluginRoot,
    SampleRate,
    BlockSize,
    Channels,
    Tempo,
    TimeDivision,
    MidiFile,
    ConfigFile,
    LogLevel,
    LogFile,
    Quiet,
    Verbose,
    DisplayInfo,
    MaxTime,
}

impl AppOption {
    pub const COUNT: usize = AppOption::MaxTime as usize + 1;

    pub fn index(self) -> usize {
        self as usize
    }
}

struct OptionDef {
    option: AppOption,
    name: &'static str,
    help: &'static str,
    short: bool,
    kind: ValueKind,
    arity: ArgumentArity,
    default: Option<i32>,
}

const OPTION_DEFS: &[OptionDef] = &[
    OptionDef {
        option: AppOption::Help,
        name: "help",
        help: "With no argument, print full help for every option. With an option name, print help for that option only.",
        short: true,
        kind: ValueKind::String,
        arity: ArgumentArity::Optional,
        default: None,
    },
    OptionDef {
        option: AppOption::Version,
        name: "version",
        help: "Print the program version and exit.",
        short: false,
        kind: ValueKind::String,
        arity: ArgumentArity::None,
        default: None,
    },
    OptionDef {
        option: AppOption::Input,
        name: "input",
        help: "Audio file to read as input. The file type is detected from the extension.",
        short: true,
        kind: ValueKind::String,
        arity: ArgumentArity::Required,
        default: None,
    },
    OptionDef {
        option: AppOption::Output,
        name: "output",
        help: "Audio file to write processed output to.",
        short: true,
        kind: ValueKind::String,
        arity: ArgumentArity::Required,
        default: None,
    },
    OptionDef {
        option: AppOption::Plugin,
        name: "plugin",
        help: "Plugin to load into the processing chain. Repeat the option to chain several plugins; they run in the order given.",
        short: true,
        kind: ValueKind::List,
        arity: ArgumentArity::Required,
        default: None,
    },
    OptionDef {
        option: AppOption::PluginRoot,
        name: "plugin-root",
        help: "Extra directory searched for plugins before the platform defaults.",
        short: false,
        kind: ValueKind::String,
        arity: ArgumentArity::Required,
        default: None,
    },
    OptionDef {
        option: AppOption::SampleRate,
        name: "sample-rate",
        help: "Sample rate in Hz used when the input does not provide one.",
        short: true,
        kind: ValueKind::Number,
        arity: ArgumentArity::Required,
        default: Some(44100),
    },
    OptionDef {
        option: AppOption::BlockSize,
        name: "block-size",
        help: "Number of sample frames processed per block.",
        short: true,
        kind: ValueKind::Number,
        arity: ArgumentArity::Required,
        default: Some(512),
    },
    OptionDef {
        option: AppOption::Channels,
        name: "channels",
        help: "Number of audio channels used when the input does not provide one.",
        short: true,
        kind: ValueKind::Number,
        arity: ArgumentArity::Required,
        default: Some(2),
    },
    OptionDef {
        option: AppOption::Tempo,
        name: "tempo",
        help: "Tempo in beats per minute reported to plugins.",
        short: true,
        kind: ValueKind::Number,
        arity: ArgumentArity::Required,
        default: Some(120),
    },
    OptionDef {
        option: AppOption::TimeDivision,
        name: "time-division",
        help: "MIDI ticks per quarter note when the MIDI file does not set one.",
        short: false,
        kind: ValueKind::Number,
        arity: ArgumentArity::Required,
        default: Some(96),
    },
    OptionDef {
        option: AppOption::MidiFile,
        name: "midi-file",
        help: "MIDI file whose events are sent to the first plugin in the chain.",
        short: true,
        kind: ValueKind::String,
        arity: ArgumentArity::Required,
        default: None,
    },
    OptionDef {
        option: AppOption::ConfigFile,
        name: "config-file",
        help: "Read further options from a file, one option or argument per line.",
        short: false,
        kind: ValueKind::String,
        arity: ArgumentArity::Required,
        default: None,
    },
    OptionDef {
        option: AppOption::LogLevel,
        name: "log-level",
        help: "Logging filter, e.g. 'debug' or 'audiohost=trace'.",
        short: true,
        kind: ValueKind::String,
        arity: ArgumentArity::Required,
        default: None,
    },
    OptionDef {
        option: AppOption::LogFile,
        name: "log-file",
        help: "Write log output to this file instead of stderr.",
        short: false,
        kind: ValueKind::String,
        arity: ArgumentArity::Required,
        default: None,
    },
    OptionDef {
        option: AppOption::Quiet,
        name: "quiet",
        help: "Only log errors.",
        short: true,
        kind: ValueKind::String,
        arity: ArgumentArity::None,
        default: None,
    },
    OptionDef {
        option: AppOption::Verbose,
        name: "verbose",
        help: "Log debugging output.",
        short: true,
        kind: ValueKind::String,
        arity: ArgumentArity::None,
        default: None,
    },
    OptionDef {
        option: AppOption::DisplayInfo,
        name: "display-info",
        help: "Print information about each loaded plugin.",
        short: true,
        kind: ValueKind::String,
        arity: ArgumentArity::None,
        default: None,
    },
    OptionDef {
        option: AppOption::MaxTime,
        name: "max-time",
        help: "Stop processing after this many milliseconds of audio.",
        short: false,
        kind: ValueKind::Number,
        arity: ArgumentArity::Required,
        default: None,
    },
];

/// Build the full option table for the audio host.
pub fn app_options() -> Result<OptionRegistry, OptionsError> {
    let mut registry = OptionRegistry::new(AppOption::COUNT);
    for def in OPTION_DEFS {
        let mut entry = OptionEntry::new(
            def.option.index(),
            def.name,
            def.help,
            def.short,
            def.kind,
            def.arity,
        );
        if let Some(default) = def.default {
            entry = entry.with_default_display(default);
        }
        registry.register(entry)?;
    }
    Ok(registry)
}
