fn main() {
    yew::Renderer::<charsearch_web::App>::new().render();
}
