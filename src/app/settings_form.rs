// app/settings_form.rs

//! Editable form behind the settings view.
//!
//! Values are seeded from the configuration file and kept in memory only.

use crossterm::event::{KeyCode, KeyEvent};
use enum_iterator::{next_cycle, previous_cycle, Sequence};
use log::*;
use tui_textarea::TextArea;

use crate::config::{AssistantSettings, VoiceModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Sequence)]
pub enum SettingsField {
    #[default]
    ModelInstruction,
    ApiUrl,
    ApiTokenEnabled,
    ApiToken,
    VoiceModel,
}

pub const MODEL_INSTRUCTION_HINT: &str =
    "Act like a [someone], you must be [something] and be [what you want] ...";
pub const API_URL_HINT: &str = "enter your api url here";
pub const API_TOKEN_HINT: &str = "enter your api token here";

pub struct SettingsForm<'a> {
    focused: SettingsField,
    model_instruction: TextArea<'a>,
    api_url: TextArea<'a>,
    api_token_enabled: bool,
    api_token: TextArea<'a>,
    voice_model: VoiceModel,
}

fn textarea_with(text: &str, hint: &str) -> TextArea<'static> {
    let lines = text.split('\n').map(|s| s.to_string()).collect::<Vec<_>>();
    let mut textarea = TextArea::new(lines);
    textarea.set_placeholder_text(hint);
    textarea
}

impl<'a> SettingsForm<'a> {
    pub fn new(settings: &AssistantSettings) -> Self {
        Self {
            focused: SettingsField::default(),
            model_instruction: textarea_with(&settings.model_instruction, MODEL_INSTRUCTION_HINT),
            api_url: textarea_with(&settings.api_url, API_URL_HINT),
            api_token_enabled: settings.api_token_enabled,
            api_token: textarea_with(&settings.api_token, API_TOKEN_HINT),
            voice_model: settings.voice_model,
        }
    }

    /// Snapshot of the current values.
    pub fn settings(&self) -> AssistantSettings {
        AssistantSettings {
            model_instruction: self.model_instruction.lines().join("\n"),
            api_url: self.api_url.lines().join(""),
            api_token_enabled: self.api_token_enabled,
            api_token: self.api_token.lines().join(""),
            voice_model: self.voice_model,
        }
    }

    pub fn focused(&self) -> SettingsField {
        self.focused
    }

    pub fn focus_next(&mut self) {
        self.focused = next_cycle(&self.focused);
        self.skip_disabled_token(true);
    }

    pub fn focus_previous(&mut self) {
        self.focused = previous_cycle(&self.focused);
        self.skip_disabled_token(false);
    }

    // The token field cannot be edited while the switch is off.
    fn skip_disabled_token(&mut self, forward: bool) {
        if self.focused == SettingsField::ApiToken && !self.api_token_enabled {
            self.focused = if forward {
                next_cycle(&self.focused)
            } else {
                previous_cycle(&self.focused)
            };
        }
    }

    pub fn api_token_enabled(&self) -> bool {
        self.api_token_enabled
    }

    pub fn voice_model(&self) -> VoiceModel {
        self.voice_model
    }

    pub fn model_instruction(&self) -> &TextArea<'a> {
        &self.model_instruction
    }

    pub fn api_url(&self) -> &TextArea<'a> {
        &self.api_url
    }

    pub fn api_token(&self) -> &TextArea<'a> {
        &self.api_token
    }

    /// Routes a key to the focused field. Returns whether it was consumed.
    pub fn input(&mut self, key_event: KeyEvent) -> bool {
        match self.focused {
            SettingsField::ModelInstruction => self.model_instruction.input(key_event),
            SettingsField::ApiUrl | SettingsField::ApiToken if key_event.code == KeyCode::Enter => {
                false
            }
            SettingsField::ApiUrl => self.api_url.input(key_event),
            SettingsField::ApiToken => self.api_token.input(key_event),
            SettingsField::ApiTokenEnabled => match key_event.code {
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.api_token_enabled = !self.api_token_enabled;
                    debug!("Api token enabled: {}", self.api_token_enabled);
                    true
                }
                _ => false,
            },
            SettingsField::VoiceModel => match key_event.code {
                KeyCode::Right | KeyCode::Char(' ') => {
                    self.voice_model = next_cycle(&self.voice_model);
                    true
                }
                KeyCode::Left => {
                    self.voice_model = previous_cycle(&self.voice_model);
                    true
                }
                _ => false,
            },
        }
    }
}
