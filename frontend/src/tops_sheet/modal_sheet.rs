use uuid::Uuid;
use yew::{html, AttrValue, Callback, Component, Context, Html, NodeRef, Properties};

/// Sheet that slides in over the page with a dimmed backdrop.
///
/// The `show` class is added after the first render so the CSS transition runs.
pub struct ModalSheet {
    pub id: String,
    node_ref: NodeRef,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for ModalSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
            node_ref: NodeRef::default(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let title_id = format!("{}-title", self.id);
        let on_close = props.on_close.reform(|_| ());

        html! {
            <div class="modal-backdrop">
                <div
                    class="top-sheet"
                    id={self.id.clone()}
                    ref={self.node_ref.clone()}
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby={title_id.clone()}
                >
                    <div class="top-sheet-header">
                        <h2 id={title_id}>{ props.title.clone() }</h2>
                        <button type="button" class="icon-btn" aria-label="Close" onclick={on_close}>
                            <i class="material-icons">{ "close" }</i>
                        </button>
                    </div>
                    <div class="top-sheet-body">
                        { props.children.clone() }
                    </div>
                </div>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            open_top_sheet(&self.node_ref);
        }
    }
}

/// Adds `show` to the sheet's class list on the next tick.
pub fn open_top_sheet(top_sheet_ref: &NodeRef) {
    if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(50).await;
            top_sheet.class_list().add_1("show").ok();
        });
    }
}
