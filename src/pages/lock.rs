use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, icon, row, text};
use cosmic::{Element, theme};

use crate::core::lock::{LockGate, PIN_LEN};
use crate::message::Message;

const KEY_WIDTH: f32 = 64.0;

fn pad_key(label: &str, message: Message) -> Element<'static, Message> {
    button::standard(label.to_string())
        .on_press(message)
        .width(Length::Fixed(KEY_WIDTH))
        .into()
}

fn digit_key(digit: u8) -> Element<'static, Message> {
    pad_key(&digit.to_string(), Message::LockDigit(digit))
}

/// PIN challenge screen. Terminal until unlock: no navigation out except a
/// correct PIN or the explicit bypass.
pub fn lock_view(gate: &LockGate) -> Element<'_, Message> {
    let mut col = column().spacing(16).align_x(Alignment::Center);

    col = col.push(icon::from_name("system-lock-screen-symbolic").size(48).icon());
    col = col.push(text::title4("Opal"));
    col = col.push(text::caption("Enter your PIN to continue"));

    let mut dots = row().spacing(12);
    for slot in 0..PIN_LEN {
        dots = dots.push(text::body(if slot < gate.entered() { "●" } else { "○" }));
    }
    col = col.push(dots);

    if gate.has_error() {
        col = col.push(text::body("Incorrect PIN"));
    }

    for digits in [[1u8, 2, 3], [4, 5, 6], [7, 8, 9]] {
        let mut keys = row().spacing(8);
        for digit in digits {
            keys = keys.push(digit_key(digit));
        }
        col = col.push(keys);
    }
    col = col.push(
        row()
            .spacing(8)
            .push(pad_key("C", Message::LockClear))
            .push(digit_key(0))
            .push(pad_key("⌫", Message::LockBackspace)),
    );

    col = col.push(
        button::text("Unlock without PIN")
            .on_press(Message::BypassLock),
    );

    container(
        container(col)
            .padding(24)
            .class(theme::Container::Card),
    )
    .center(Length::Fill)
    .into()
}
