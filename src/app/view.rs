// SPDX-License-Identifier: MPL-2.0
//! Overlay window layout.

use super::Message;
use crate::ui::notifications::{toast, ToastState};
use iced::widget::container;
use iced::{alignment, Element, Length};

/// Renders the toast centred horizontally at the top of the overlay window.
pub fn view(toast_state: &ToastState) -> Element<'_, Message> {
    container(toast::view(toast_state, Message::Tapped))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Top)
        .into()
}
