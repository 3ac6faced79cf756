use dotenv::dotenv;
use mjeshtri::{
    dtos::{gigdtos::CreateGigDto, offerdtos::SendOfferDto},
    models::{gigmodel::GigCategory, usermodel::DemoAccount},
    router::navigate::NavigateTo,
    service::error::ServiceError,
    AppState, Config,
};

fn main() {
    dotenv().ok();

    let config = Config::init();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let mut state = AppState::new(config);
    tracing::info!("✅ Mjeshtri store ready on {}", state.screen());

    if let Err(err) = demo_session(&mut state) {
        tracing::error!("🔥 Demo session stopped: {}", err);
    }

    for toast in state.take_toasts() {
        tracing::info!("[{:?}] {}", toast.level, toast.title);
    }

    match serde_json::to_string_pretty(&state.render()) {
        Ok(view) => println!("{}", view),
        Err(err) => tracing::error!("Could not serialize the current view: {}", err),
    }
}

/// Walks one gig from posting to the chat that opens once an offer is taken.
fn demo_session(state: &mut AppState) -> Result<(), ServiceError> {
    state.complete_onboarding();
    state.demo_sign_in(DemoAccount::Customer)?;
    state.navigate(NavigateTo::CreateGig)?;

    let location = state.env.default_location.clone();
    let gig = state.create_gig(CreateGigDto {
        title: "Replace kitchen faucet".to_string(),
        description: "The old faucet drips constantly and needs replacing.".to_string(),
        budget: Some("3500".to_string()),
        ..CreateGigDto::new(GigCategory::Plumber, &location)
    })?;

    state.logout();
    state.demo_sign_in(DemoAccount::Professional)?;
    state.navigate(NavigateTo::SendOffer { gig: gig.clone() })?;
    let offer = state.send_offer(
        gig.id,
        SendOfferDto {
            price: "3200".to_string(),
            description: "I have the part in my van and can come this afternoon.".to_string(),
            estimated_time: "1 hour".to_string(),
        },
    )?;

    state.logout();
    state.demo_sign_in(DemoAccount::Customer)?;
    state.accept_offer(gig.id, offer.id)?;
    tracing::info!("Session ended on {}", state.screen());
    Ok(())
}
