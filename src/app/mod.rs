use crate::api::EnvConfig;
use crate::components::ui::{Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Spinner};
use crate::dnd::DragReparentBinding;
use crate::shortcuts::bind_keyboard_shortcuts;
use crate::state::{AppContext, AppState};
use crate::theme::{bind_theme_controllers, restore_saved_theme};
use leptos::prelude::*;

/// Enhances the server-rendered page: rows become draggable, theme controls
/// and shortcuts are wired, and drop progress/failures show in an overlay.
#[component]
pub(crate) fn App(config: EnvConfig) -> impl IntoView {
    let app_state = AppContext(AppState::new(config));
    provide_context(app_state.clone());

    if let Some(theme) = restore_saved_theme() {
        app_state.0.theme.set(Some(theme.to_string()));
    }
    bind_theme_controllers(app_state.clone());

    // Rows are already in the document; bind them now. Closures own the binding.
    let _ = DragReparentBinding::attach(app_state.clone());

    // Keep the window listener alive.
    let shortcuts_handle: StoredValue<Option<WindowListenerHandle>> = StoredValue::new(None);
    shortcuts_handle.set_value(Some(bind_keyboard_shortcuts()));

    view! { <StatusOverlay /> }
}

#[component]
fn StatusOverlay() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let drop_in_flight = app_state.0.drop_in_flight;
    let notice = app_state.0.notice;

    view! {
        <div class="pointer-events-none fixed bottom-4 right-4 z-50 flex max-w-sm flex-col items-end gap-2">
            <Show when=move || drop_in_flight.get() fallback=|| ().into_view()>
                <div class="pointer-events-auto flex items-center gap-2 rounded-md border bg-background px-3 py-2 text-xs text-muted-foreground shadow-sm">
                    <Spinner />
                    "Moving..."
                </div>
            </Show>

            <Show when=move || notice.get().is_some() fallback=|| ().into_view()>
                <Alert class="pointer-events-auto border-destructive/30 bg-background shadow-sm">
                    <div class="flex items-start justify-between gap-3">
                        <AlertDescription class="text-destructive">
                            {move || notice.get().unwrap_or_default()}
                        </AlertDescription>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Sm
                            on:click=move |_| notice.set(None)
                        >
                            "Dismiss"
                        </Button>
                    </div>
                </Alert>
            </Show>
        </div>
    }
}
