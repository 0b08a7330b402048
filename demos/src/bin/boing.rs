use std::ops::ControlFlow::Continue;

use boing_core::prelude::*;
use boing_front::{Error, minifb::Window};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let mut win = Window::builder().build()?;

    let scene = Scene::default();
    let phys = Physics::default();
    let mut st = AnimationState::new(&phys);

    win.run(|frame| {
        if frame.n % 600 == 0 {
            log::debug!("frame {}: ball at {:?}", frame.n, st.center());
        }
        frame.stats += scene.step_and_draw(&mut st, &phys, &mut frame.target);
        Continue(())
    })
}
