use janbot::app::ConsoleApp;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    ConsoleApp::new(args).run();
}
