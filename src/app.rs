use leptos::html::{Input, Select};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::{
    application::{ChartRenderer, ConvertAmountUseCase, LoadCatalogUseCase},
    config::WidgetConfig,
    domain::{
        indicators::IndicatorOption,
        logging::LogComponent,
    },
    infrastructure::{CanvasSurface, MindicadorClient},
    log_debug, log_error,
};

type HistoryRenderer = ChartRenderer<CanvasSurface>;

/// 🦀 Converter widget: amount form, result line and history chart
#[component]
pub fn App(#[prop(optional)] config: Option<WidgetConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();

    // Append-only; filled once per mount
    let (options, set_options) = create_signal::<Vec<IndicatorOption>>(Vec::new());
    // Latest user-visible message, always overwritten
    let (message, set_message) = create_signal(String::new());

    let renderer = store_value::<Option<HistoryRenderer>>(None);
    let config = store_value(config);

    create_effect(move |_| {
        let client = MindicadorClient::new(config.get_value());
        spawn_local(async move {
            match LoadCatalogUseCase::new(client).execute().await {
                Ok(loaded) => set_options.update(|current| current.extend(loaded)),
                Err(e) => set_message.set(e.user_message()),
            }
        });
    });

    let on_submit = move |raw_amount: String, raw_code: String| {
        let cfg = config.get_value();
        spawn_local(async move {
            let use_case = ConvertAmountUseCase::new(MindicadorClient::new(cfg.clone()))
                .with_history_window(cfg.history_window);

            let conversion = match use_case.execute(&raw_amount, &raw_code).await {
                Ok(conversion) => conversion,
                Err(e) => {
                    set_message.set(e.user_message());
                    return;
                }
            };
            set_message.set(conversion.message());

            let mut outcome = Ok(());
            renderer.update_value(|slot| {
                let history = slot.get_or_insert_with(|| {
                    ChartRenderer::new(CanvasSurface::new(cfg.canvas_id.clone(), cfg.chart_width, cfg.chart_height))
                });
                outcome = history.render_data(&conversion.chart);
            });

            if let Err(e) = outcome {
                log_error!(LogComponent::Presentation("App"), "❌ {e}");
                set_message.set(e.user_message());
            }
        });
    };

    let (canvas_id, width, height) =
        config.with_value(|c| (c.canvas_id.clone(), c.chart_width, c.chart_height));

    view! {
        <div class="converter-app">
            <h1>"Conversor de monedas"</h1>
            <ConverterForm options=options on_submit=on_submit />
            <ResultPanel message=message />
            <canvas id=canvas_id width=width height=height class="history-chart" />
        </div>
    }
}

/// 📝 Amount input and indicator dropdown
#[component]
fn ConverterForm<F>(options: ReadSignal<Vec<IndicatorOption>>, on_submit: F) -> impl IntoView
where
    F: Fn(String, String) + 'static,
{
    let amount_ref = create_node_ref::<Input>();
    let currency_ref = create_node_ref::<Select>();

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let raw_amount = amount_ref.get().map(|input| input.value()).unwrap_or_default();
        let raw_code = currency_ref.get().map(|select| select.value()).unwrap_or_default();

        log_debug!(LogComponent::Presentation("ConverterForm"), "Submit: amount='{raw_amount}' code='{raw_code}'");
        on_submit(raw_amount, raw_code);
    };

    view! {
        <form id="form" on:submit=handle_submit>
            <input id="amount" type="text" inputmode="decimal" placeholder="Monto en CLP" node_ref=amount_ref />
            <select id="currency" node_ref=currency_ref>
                <option value="" disabled=true selected=true>"Seleccione moneda"</option>
                <For
                    each=move || options.get()
                    key=|option| option.value
                    children=move |option| {
                        view! { <option value=option.value.as_str()>{option.label}</option> }
                    }
                />
            </select>
            <button type="submit">"Buscar"</button>
        </form>
    }
}

/// 💬 Result area: validation errors, fetch errors or the converted amount
#[component]
fn ResultPanel(message: ReadSignal<String>) -> impl IntoView {
    view! {
        <div id="result" class="result">
            {move || message.get()}
        </div>
    }
}
