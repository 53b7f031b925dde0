//! Hosted loopback simulator.
//!
//! Runs the Display Manager core on a PC with no hardware: protocol bytes
//! come in on stdin, transmitted frames go out as `[TX] aa 01 ..` hex lines
//! on stdout, and the "display" is a console widget registry with the same
//! two demo pages the firmware ships.
//!
//!   printf '\xaa\x01\x01\x7b\x00\x11\xe7' | cargo run --bin sim
//!
//! Real serial ports belong to the board ports; this binary only does the
//! loopback mode.

use std::fmt::Write as _;
use std::io::Read;
use std::time::Instant;

use display_manager::{Binder, DisplayManager, Platform, UiBackend};

struct SimPlatform {
    start: Instant,
}

impl Platform for SimPlatform {
    fn write_bytes(&self, data: &[u8]) {
        let mut line = String::with_capacity(4 + data.len() * 3);
        line.push_str("[TX]");
        for byte in data {
            let _ = write!(line, " {byte:02x}");
        }
        println!("{line}");
    }

    fn millis(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }

    fn log(&self, msg: &str) {
        eprintln!("[DM] {msg}");
    }
}

/// Widget registry entry. Buttons keep the text of their child label.
enum Widget {
    Label { text: String },
    Slider { value: i16 },
    Button { label: String },
}

struct Entry {
    widget: Widget,
    visible: bool,
    enabled: bool,
}

impl Entry {
    fn label(text: &str) -> Self {
        Self::new(Widget::Label { text: text.into() })
    }

    fn slider(value: i16) -> Self {
        Self::new(Widget::Slider { value })
    }

    fn button(label: &str) -> Self {
        Self::new(Widget::Button { label: label.into() })
    }

    fn new(widget: Widget) -> Self {
        Self {
            widget,
            visible: true,
            enabled: true,
        }
    }
}

/// Console stand-in for the toolkit: page 0 is Home (title label, status
/// label, OK button), page 1 is the slider demo (label, slider).
struct ConsoleUi {
    widgets: Vec<Entry>,
    page_count: u8,
    current_page: u8,
}

impl ConsoleUi {
    fn new() -> Self {
        Self {
            widgets: vec![
                Entry::label("Display Manager"),
                Entry::label("Waiting for host..."),
                Entry::button("OK"),
                Entry::label("Adjust value:"),
                Entry::slider(0),
            ],
            page_count: 2,
            current_page: 0,
        }
    }

    fn dump(&self) {
        eprintln!("[UI] page {}/{}", self.current_page, self.page_count - 1);
        for (idx, entry) in self.widgets.iter().enumerate() {
            let desc = match &entry.widget {
                Widget::Label { text } => format!("label {text:?}"),
                Widget::Slider { value } => format!("slider {value}"),
                Widget::Button { label } => format!("button {label:?}"),
            };
            eprintln!(
                "[UI]   {idx}: {desc}{}{}",
                if entry.visible { "" } else { " hidden" },
                if entry.enabled { "" } else { " disabled" },
            );
        }
    }
}

impl UiBackend for ConsoleUi {
    fn show_page(&mut self, page_id: u8) -> bool {
        if page_id >= self.page_count {
            return false;
        }
        self.current_page = page_id;
        println!("[UI] page {page_id}");
        true
    }

    fn set_text(&mut self, widget_idx: u8, text: &str) -> bool {
        let Some(entry) = self.widgets.get_mut(widget_idx as usize) else {
            return false;
        };
        match &mut entry.widget {
            Widget::Label { text: t } | Widget::Button { label: t } => {
                *t = text.into();
                println!("[UI] widget {widget_idx} text = {text:?}");
                true
            }
            Widget::Slider { .. } => false,
        }
    }

    fn set_value(&mut self, widget_idx: u8, value: i16) -> bool {
        let Some(entry) = self.widgets.get_mut(widget_idx as usize) else {
            return false;
        };
        match &mut entry.widget {
            Widget::Slider { value: v } => {
                *v = value;
                println!("[UI] widget {widget_idx} value = {value}");
                true
            }
            _ => false,
        }
    }

    fn set_visible(&mut self, widget_idx: u8, visible: bool) {
        if let Some(entry) = self.widgets.get_mut(widget_idx as usize) {
            entry.visible = visible;
            println!("[UI] widget {widget_idx} visible = {visible}");
        }
    }

    fn set_enabled(&mut self, widget_idx: u8, enabled: bool) {
        if let Some(entry) = self.widgets.get_mut(widget_idx as usize) {
            entry.enabled = enabled;
            println!("[UI] widget {widget_idx} enabled = {enabled}");
        }
    }
}

fn main() {
    let platform = SimPlatform {
        start: Instant::now(),
    };
    let mut dm = DisplayManager::new(&platform, Binder::new(ConsoleUi::new()));

    eprintln!("[SIM] loopback mode, feeding stdin to the parser");

    let mut stdin = std::io::stdin().lock();
    let mut buf = [0u8; 64];
    loop {
        match stdin.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => dm.receive(&buf[..n]),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => {
                eprintln!("[SIM] stdin: {e}");
                break;
            }
        }
        dm.process();
    }

    dm.handlers().ui().dump();
    let stats = dm.stats();
    eprintln!(
        "[SIM] frames ok {}, crc errors {}, length errors {}",
        stats.frames_ok, stats.frames_crc_err, stats.frames_len_err
    );
}
