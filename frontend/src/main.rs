use miniapp::App;
use yew::Renderer;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    miniapp::telegram::ready();
    // referral attribution happens server-side from the signed initData
    if let Some(code) = miniapp::telegram::start_param() {
        log::info!("launched with start parameter {}", code);
    }

    Renderer::<App>::new().render();
}
