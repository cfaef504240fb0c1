#![allow(dead_code)]

use form_api::{CustomForm, Dropdown, Input, ModalForm, SimpleForm, Slider, StepSlider, Toggle};
use form_api::{Button, ImageType};

/// Scenario A: toggle + slider, no explicit labels.
pub fn toggle_and_slider() -> CustomForm {
    CustomForm::new().add_toggle("Enable?").add_slider("Level", 0, 10)
}

/// Scenario B: two buttons, the second labelled "quit".
pub fn play_or_quit() -> SimpleForm {
    SimpleForm::new()
        .title("Menu")
        .add_button(Button::new("Play"))
        .add_button(Button::new("Quit").label("quit"))
}

/// Scenario D: a single three-option dropdown.
pub fn pick_one() -> CustomForm {
    CustomForm::new().add_dropdown("Pick", ["A", "B", "C"])
}

pub fn confirm_modal() -> ModalForm {
    ModalForm::new()
        .title("Teleport")
        .content("Teleport to spawn?")
        .button1("Yes")
        .button2("No")
}

/// Every element kind, with labels on the interactive ones.
pub fn settings_form() -> CustomForm {
    CustomForm::new()
        .title("Settings")
        .add_label("Adjust your game settings")
        .add_header("Audio")
        .add(Slider::new("Volume", 0, 100).step(5).default_value(50).label("volume"))
        .add_divider()
        .add(Toggle::new("Subtitles").default_value(true).label("subtitles"))
        .add(StepSlider::new("Difficulty", ["Easy", "Normal", "Hard"]).default_index(1).label("difficulty"))
        .add(Dropdown::new("Language", ["English", "Deutsch"]).label("language"))
        .add(Input::new("Nickname").placeholder("Steve").tooltip("Shown above your head").label("nick"))
}

pub fn shop_menu() -> SimpleForm {
    SimpleForm::new()
        .title("Shop")
        .content("Pick a category")
        .add_button(Button::new("Weapons").image(ImageType::Path, "textures/items/diamond_sword"))
        .add_button(Button::new("Food").image(ImageType::Url, "https://example.com/apple.png").label("food"))
        .add_button(Button::new("Close").image(ImageType::Url, ""))
}
