//! The upload drop zone.
//!
//! A dashed surface accepting an OS file drag or a click into the native
//! picker. Drag status {idle, dragging} and the inline validation message
//! live in `UploadState`; this module only draws them and wires the events.

use crate::app::{Courseshelf, UploadState};
use crate::constants::{BORDER_RADIUS_LG, GAP_SM, UPLOAD_ZONE_HEIGHT};
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::ActiveTheme as _;

pub(super) fn render_upload_zone(
    upload: &UploadState,
    cx: &Context<Courseshelf>,
) -> Stateful<Div> {
    let label = upload
        .selected_name
        .clone()
        .unwrap_or_else(|| "Drag and drop a PDF".to_string());
    let error = upload.error.clone();

    let border_color = if upload.drag_active {
        cx.theme().primary
    } else {
        cx.theme().border
    };
    let bg = if upload.drag_active {
        cx.theme().muted
    } else {
        cx.theme().transparent
    };

    div()
        .id("upload-zone")
        .w_full()
        .h(px(UPLOAD_ZONE_HEIGHT))
        .flex_none()
        .rounded(px(BORDER_RADIUS_LG))
        .border_2()
        .border_dashed()
        .border_color(border_color)
        .bg(bg)
        .flex()
        .flex_col()
        .items_center()
        .justify_center()
        .gap(px(GAP_SM))
        .cursor_pointer()
        .hover(|s| s.bg(cx.theme().muted))
        .drag_over::<ExternalPaths>(|style, _, _, cx| {
            style.border_color(cx.theme().primary).bg(cx.theme().muted)
        })
        .on_drag_move(cx.listener(
            |this, event: &DragMoveEvent<ExternalPaths>, _window, cx| {
                let inside = event.bounds.contains(&event.event.position);
                if this.upload.drag_active != inside {
                    this.upload.drag_active = inside;
                    cx.notify();
                }
            },
        ))
        .on_drop(cx.listener(|this, paths: &ExternalPaths, _window, cx| {
            this.handle_dropped_paths(paths.paths(), cx);
        }))
        .on_click(cx.listener(|this, _, window, cx| this.open_file_picker(window, cx)))
        .child(
            div()
                .text_size(px(24.0))
                .text_color(cx.theme().muted_foreground)
                .child("⇪"),
        )
        .child(
            div()
                .text_size(px(16.0))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(cx.theme().muted_foreground)
                .child(label),
        )
        .child(
            div()
                .text_size(px(12.0))
                .text_color(cx.theme().muted_foreground)
                .child("*Limit 25 MB per file."),
        )
        .when_some(error, |el, message| {
            el.child(
                div()
                    .text_size(px(12.0))
                    .text_color(cx.theme().danger)
                    .child(message),
            )
        })
}
