//! One-second delay used by the OTP resend cooldown tickers.
//!
//! The ticking task itself is spawned by the owning page, so it is dropped
//! (and the countdown stops) when that page unmounts.

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub async fn sleep_one_second() {
    gloo_timers::future::TimeoutFuture::new(1_000).await;
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub async fn sleep_one_second() {
    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
}
