//! UI rendering - page composition, the upload widget, and coursework cards.
//!
//! The root view stacks the header, the upload drop zone, and the scrollable
//! card list bound to the catalog's current records.

mod cards;
mod upload;

use crate::app::Courseshelf;
use crate::constants::{
    BORDER_RADIUS_MD, GAP_LG, GAP_MD, GAP_SM, HEADER_HEIGHT, PADDING_LG, PADDING_SM,
};
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};

impl Render for Courseshelf {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let count = self.store.len();
        let status = self.system.status.clone();

        v_flex()
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(render_header(count, status, cx))
            .child(
                div()
                    .px(px(PADDING_LG))
                    .pt(px(PADDING_LG))
                    .child(upload::render_upload_zone(&self.upload, cx)),
            )
            .child(
                div()
                    .id("cards-scroll")
                    .flex_1()
                    .overflow_y_scroll()
                    .p(px(PADDING_LG))
                    .child(
                        v_flex().gap(px(GAP_LG)).children(
                            self.store
                                .records()
                                .iter()
                                .zip(self.cards.ids().iter().copied())
                                .enumerate()
                                .map(|(ix, (record, card_id))| {
                                    let thumbnail = self.thumbnail_for(card_id);
                                    cards::render_card(ix, card_id, record, thumbnail, cx)
                                }),
                        ),
                    ),
            )
    }
}

/// Render the header bar: title, document count, status, clear control
fn render_header(
    count: usize,
    status: Option<String>,
    cx: &Context<Courseshelf>,
) -> impl IntoElement {
    h_flex()
        .w_full()
        .h(px(HEADER_HEIGHT))
        .px(px(PADDING_LG))
        .flex_none()
        .items_center()
        .justify_between()
        .border_b_1()
        .border_color(cx.theme().border)
        .child(
            h_flex()
                .gap(px(GAP_MD))
                .items_center()
                .child(
                    div()
                        .text_size(px(16.0))
                        .font_weight(FontWeight::BOLD)
                        .child("Courseshelf"),
                )
                .child(
                    div()
                        .text_size(px(12.0))
                        .text_color(cx.theme().muted_foreground)
                        .child(format!("{count} document(s)")),
                ),
        )
        .child(
            h_flex()
                .gap(px(GAP_MD))
                .items_center()
                .when_some(status, |el, message| {
                    el.child(
                        div()
                            .text_size(px(12.0))
                            .text_color(cx.theme().danger)
                            .child(message),
                    )
                })
                .child(
                    div()
                        .id("clear-catalog")
                        .px(px(PADDING_SM))
                        .py(px(GAP_SM))
                        .rounded(px(BORDER_RADIUS_MD))
                        .text_size(px(12.0))
                        .text_color(cx.theme().muted_foreground)
                        .hover(|s| s.bg(cx.theme().muted))
                        .cursor_pointer()
                        .on_click(cx.listener(|this, _, _window, cx| this.clear_catalog(cx)))
                        .child("Clear all"),
                ),
        )
}
