//! Built-in element kinds and their parsers.

pub mod actions;
pub mod choice_set_input;
pub mod common;
pub mod container;
pub mod fact_set;
pub mod image;
pub mod rich_text_block;
pub mod text_block;
pub mod text_input;
pub mod toggle_input;
pub mod unknown;

pub use actions::{
    ActionProperties, ActionSet, ActionSetParser, OpenUrlAction, OpenUrlActionParser,
    SubmitAction, SubmitActionParser,
};
pub use choice_set_input::{Choice, ChoiceSetInput, ChoiceSetInputParser};
pub use common::{ElementProperties, InputProperties};
pub use container::{Column, ColumnParser, ColumnSet, ColumnSetParser, Container, ContainerParser};
pub use fact_set::{Fact, FactSet, FactSetParser};
pub use image::{Image, ImageParser, ImageSet, ImageSetParser};
pub use rich_text_block::{RichTextBlock, RichTextBlockParser, TextRun};
pub use text_block::{TextBlock, TextBlockParser};
pub use text_input::{TextInput, TextInputParser};
pub use toggle_input::{ToggleInput, ToggleInputParser};
pub use unknown::{UNKNOWN_ELEMENT_TYPE, UnknownElement, UnknownElementParser};

use crate::parser::ElementParser;
use std::sync::Arc;

fn entry<P: ElementParser + 'static>(
    discriminator: &'static str,
    parser: P,
) -> (&'static str, Arc<dyn ElementParser>) {
    (discriminator, Arc::new(parser))
}

pub(crate) fn builtin_parsers() -> Vec<(&'static str, Arc<dyn ElementParser>)> {
    vec![
        entry(TextBlock::TYPE, TextBlockParser),
        entry(RichTextBlock::TYPE, RichTextBlockParser),
        entry(Image::TYPE, ImageParser),
        entry(ImageSet::TYPE, ImageSetParser),
        entry(Container::TYPE, ContainerParser),
        entry(ColumnSet::TYPE, ColumnSetParser),
        entry(Column::TYPE, ColumnParser),
        entry(FactSet::TYPE, FactSetParser),
        entry(ActionSet::TYPE, ActionSetParser),
        entry(TextInput::TYPE, TextInputParser),
        entry(ToggleInput::TYPE, ToggleInputParser),
        entry(ChoiceSetInput::TYPE, ChoiceSetInputParser),
        entry(SubmitAction::TYPE, SubmitActionParser),
        entry(OpenUrlAction::TYPE, OpenUrlActionParser),
    ]
}
