//! Coursework card rendering.
//!
//! Each card pairs the record's first-page thumbnail (click-through to the
//! full document) with a caption block. The caption's title, description,
//! and tags are placeholder content, not derived from the PDF.

use crate::app::Courseshelf;
use crate::catalog::FileRecord;
use crate::constants::{
    BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_XL, CARD_MAX_WIDTH, CARD_THUMB_HEIGHT,
    CARD_THUMB_WIDTH, GAP_LG, GAP_MD, GAP_SM, PADDING_LG, PADDING_SM,
};
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};
use std::path::PathBuf;

pub(super) fn render_card(
    ix: usize,
    card_id: u64,
    record: &FileRecord,
    thumbnail: Option<PathBuf>,
    cx: &Context<Courseshelf>,
) -> Stateful<Div> {
    let remove_name = record.name.clone();
    let meta_line = format!(
        "{} - {} - {}",
        record.name,
        record.mime_type,
        format_size(record.size)
    );

    h_flex()
        .id(("card", ix))
        .w_full()
        .max_w(px(CARD_MAX_WIDTH))
        .p(px(PADDING_LG))
        .gap(px(GAP_LG))
        .items_start()
        .rounded(px(BORDER_RADIUS_XL))
        .bg(cx.theme().secondary)
        .border_1()
        .border_color(cx.theme().border)
        .child(render_thumbnail(ix, card_id, thumbnail, cx))
        .child(
            v_flex()
                .flex_1()
                .gap(px(GAP_MD))
                .child(
                    v_flex()
                        .gap(px(GAP_SM))
                        .child(
                            div()
                                .text_size(px(16.0))
                                .font_weight(FontWeight::BOLD)
                                .child("How does the temperature of a Copp..."),
                        )
                        .child(
                            div()
                                .text_size(px(13.0))
                                .text_color(cx.theme().muted_foreground)
                                .child(
                                    "How does the temperature of a Copper pipe affect the time \
                                     it takes a magnet t...",
                                ),
                        ),
                )
                .child(
                    h_flex()
                        .flex_wrap()
                        .gap(px(GAP_MD))
                        .child(tag_chip("Physics HL", cx))
                        .child(tag_chip("18 min read", cx))
                        .child(tag_chip("2388 words", cx))
                        .child(tag_chip("7/7", cx))
                        .child(tag_chip("English", cx)),
                )
                .child(
                    h_flex()
                        .items_center()
                        .justify_between()
                        .child(
                            div()
                                .text_size(px(11.0))
                                .text_color(cx.theme().muted_foreground)
                                .child(meta_line),
                        )
                        .child(
                            div()
                                .id(("card-remove", ix))
                                .px(px(PADDING_SM))
                                .py(px(2.0))
                                .rounded(px(BORDER_RADIUS_MD))
                                .text_size(px(12.0))
                                .text_color(cx.theme().danger)
                                .hover(|s| s.bg(cx.theme().muted))
                                .cursor_pointer()
                                .on_click(cx.listener(move |this, _, _window, cx| {
                                    this.remove_record(&remove_name, cx)
                                }))
                                .child("Remove"),
                        ),
                ),
        )
}

/// First-page preview surface with the click-through to the full document.
fn render_thumbnail(
    ix: usize,
    card_id: u64,
    thumbnail: Option<PathBuf>,
    cx: &Context<Courseshelf>,
) -> Stateful<Div> {
    div()
        .id(("card-preview", ix))
        .w(px(CARD_THUMB_WIDTH))
        .h(px(CARD_THUMB_HEIGHT))
        .flex_none()
        .rounded(px(BORDER_RADIUS_LG))
        .bg(cx.theme().muted)
        .overflow_hidden()
        .flex()
        .items_center()
        .justify_center()
        .cursor_pointer()
        .on_click(cx.listener(move |this, _, _window, cx| this.open_document(card_id, cx)))
        .map(|el| match thumbnail {
            Some(path) => el.child(
                img(path)
                    .w_full()
                    .h_full()
                    .object_fit(ObjectFit::Contain),
            ),
            None => el.child(
                div()
                    .text_size(px(12.0))
                    .text_color(cx.theme().muted_foreground)
                    .child("No preview"),
            ),
        })
}

fn tag_chip(label: &'static str, cx: &Context<Courseshelf>) -> Div {
    h_flex()
        .px(px(PADDING_SM))
        .py(px(2.0))
        .rounded_full()
        .bg(cx.theme().background)
        .text_size(px(11.0))
        .child(label)
}

/// Human-readable byte count for the card's metadata line.
fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    if size >= MB {
        format!("{:.1} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.1} KB", size as f64 / KB as f64)
    } else {
        format!("{size} B")
    }
}
