//! Connect and claim flows driven through mock collaborators.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::{Mutex, Once};

use alloy_primitives::{address, Address};
use async_trait::async_trait;
use log::{Level, LevelFilter, Log, Metadata, Record};

use shared::claim::claim_selector;
use shared::{
    Chain, ClaimOutcome, MintConfig, MintController, MintError, MintState, MintView, Result,
    TransactionReceipt, TransactionRequest, TransactionSender, WalletConnector,
};

const DROP: &str = "0xbaE62330A4CBb09FDE57c2Dc25f7E05A421424ba";
const USER: Address = address!("1111111111111111111111111111111111111111");

// ---------------------------------------------------------------------------
// log capture
// ---------------------------------------------------------------------------

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
static INIT_LOGGER: Once = Once::new();

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

fn init_logger() {
    INIT_LOGGER.call_once(|| {
        log::set_logger(&CaptureLogger).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

fn logged(level: Level, needle: &str) -> bool {
    RECORDS
        .lock()
        .unwrap()
        .iter()
        .any(|(l, msg)| *l == level && msg.contains(needle))
}

// ---------------------------------------------------------------------------
// mocks
// ---------------------------------------------------------------------------

struct MockWallet {
    authorised: Option<Address>,
    connect_error: Option<MintError>,
    chain_id: Cell<u64>,
    refuse_switch: bool,
    ignore_switch: bool,
    connection_requests: Cell<usize>,
    switch_requests: Cell<usize>,
}

impl MockWallet {
    fn on(chain: Chain) -> Self {
        Self {
            authorised: None,
            connect_error: None,
            chain_id: Cell::new(chain.id()),
            refuse_switch: false,
            ignore_switch: false,
            connection_requests: Cell::new(0),
            switch_requests: Cell::new(0),
        }
    }
}

#[async_trait(?Send)]
impl WalletConnector for MockWallet {
    async fn request_connection(&self) -> Result<Address> {
        self.connection_requests.set(self.connection_requests.get() + 1);
        tokio::task::yield_now().await;
        match &self.connect_error {
            Some(err) => Err(err.clone()),
            None => Ok(USER),
        }
    }

    async fn current_address(&self) -> Result<Option<Address>> {
        Ok(self.authorised)
    }

    async fn chain_id(&self) -> Result<u64> {
        Ok(self.chain_id.get())
    }

    async fn switch_chain(&self, chain: Chain) -> Result<()> {
        self.switch_requests.set(self.switch_requests.get() + 1);
        if self.refuse_switch {
            return Err(MintError::Transaction("User rejected the request.".to_string()));
        }
        if !self.ignore_switch {
            self.chain_id.set(chain.id());
        }
        Ok(())
    }
}

#[derive(Default)]
struct MockSender {
    sent: RefCell<Vec<TransactionRequest>>,
    send_error: Option<MintError>,
    reverted: bool,
}

#[async_trait(?Send)]
impl TransactionSender for MockSender {
    async fn send_transaction(&self, request: &TransactionRequest) -> Result<String> {
        self.sent.borrow_mut().push(request.clone());
        // Suspend like a wallet prompt would, letting other clicks run.
        tokio::task::yield_now().await;
        match &self.send_error {
            Some(err) => Err(err.clone()),
            None => Ok(format!("0x{:064x}", self.sent.borrow().len())),
        }
    }

    async fn wait_for_receipt(&self, tx_hash: &str) -> Result<TransactionReceipt> {
        tokio::task::yield_now().await;
        Ok(TransactionReceipt {
            tx_hash: tx_hash.to_string(),
            block_number: 42,
            success: !self.reverted,
        })
    }
}

fn controller(
    wallet: MockWallet,
    sender: MockSender,
) -> (
    MintController<MockWallet, MockSender>,
    Rc<MockWallet>,
    Rc<MockSender>,
) {
    let wallet = Rc::new(wallet);
    let sender = Rc::new(sender);
    let config = MintConfig::new("mumbai", DROP).unwrap();
    let controller = MintController::new(config, Rc::clone(&wallet), Rc::clone(&sender));
    (controller, wallet, sender)
}

async fn connected(
    wallet: MockWallet,
    sender: MockSender,
) -> (
    MintController<MockWallet, MockSender>,
    Rc<MockWallet>,
    Rc<MockSender>,
) {
    let parts = controller(wallet, sender);
    parts.0.connect().await.unwrap();
    parts
}

// ---------------------------------------------------------------------------
// connect
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_connect_requests_once_and_never_claims() {
    let (controller, wallet, sender) = controller(MockWallet::on(Chain::Mumbai), MockSender::default());
    assert_eq!(MintView::from_state(&controller.state()).label(), "Connect Wallet");

    let address = controller.connect().await.unwrap();

    assert_eq!(address, USER);
    assert_eq!(wallet.connection_requests.get(), 1);
    assert!(sender.sent.borrow().is_empty());
    assert_eq!(controller.state().address, Some(USER));
    assert_eq!(MintView::from_state(&controller.state()).label(), "Claim a NFT");
}

#[tokio::test]
async fn test_double_connect_click_opens_one_prompt() {
    let (controller, wallet, _) = controller(MockWallet::on(Chain::Mumbai), MockSender::default());

    let (first, second) = tokio::join!(controller.connect(), controller.connect());

    assert!(first.is_ok());
    assert!(matches!(second, Err(MintError::ConnectionRejected(_))));
    assert_eq!(wallet.connection_requests.get(), 1);
}

#[tokio::test]
async fn test_connect_rejected_stays_disconnected() {
    let mut wallet = MockWallet::on(Chain::Mumbai);
    wallet.connect_error = Some(MintError::ConnectionRejected("User rejected the request.".into()));
    let (controller, _, _) = controller(wallet, MockSender::default());

    let err = controller.connect().await.unwrap_err();

    assert!(err.is_connection_error());
    let state = controller.state();
    assert!(!state.connected());
    assert!(!state.connecting);
    assert_eq!(MintView::from_state(&state).label(), "Connect Wallet");
}

#[tokio::test]
async fn test_restore_picks_up_authorised_account() {
    let mut wallet = MockWallet::on(Chain::Mumbai);
    wallet.authorised = Some(USER);
    let (controller, wallet, _) = controller(wallet, MockSender::default());

    assert_eq!(controller.restore().await.unwrap(), Some(USER));
    assert!(controller.state().connected());
    assert_eq!(wallet.connection_requests.get(), 0);
}

#[tokio::test]
async fn test_account_change_and_disconnect() {
    let (controller, _, _) = connected(MockWallet::on(Chain::Mumbai), MockSender::default()).await;
    let other = address!("3333333333333333333333333333333333333333");

    controller.set_address(Some(other));
    assert_eq!(controller.state().address, Some(other));

    controller.disconnect();
    assert_eq!(MintView::from_state(&controller.state()).label(), "Connect Wallet");
}

// ---------------------------------------------------------------------------
// claim
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_claim_submits_transaction_to_configured_contract() {
    let (controller, _, sender) = connected(MockWallet::on(Chain::Mumbai), MockSender::default()).await;

    let receipt = controller.claim().await.unwrap();

    let sent = sender.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, shared::utils::parse_address(DROP).unwrap());
    assert_eq!(sent[0].from, USER);
    assert_eq!(&sent[0].data[..4], &claim_selector());
    assert_eq!(receipt.block_number, 42);

    let state = controller.state();
    assert!(!state.pending);
    assert_eq!(
        state.last_outcome,
        Some(ClaimOutcome::Success { tx_hash: receipt.tx_hash.clone(), block_number: 42 })
    );
}

#[tokio::test]
async fn test_rapid_claim_clicks_submit_once() {
    let (controller, _, sender) = connected(MockWallet::on(Chain::Mumbai), MockSender::default()).await;

    let (first, second, third) = tokio::join!(controller.claim(), controller.claim(), controller.claim());

    assert!(first.is_ok());
    assert_eq!(second.unwrap_err(), MintError::ClaimPending);
    assert_eq!(third.unwrap_err(), MintError::ClaimPending);
    assert_eq!(sender.sent.borrow().len(), 1);
    assert!(!controller.state().pending);
}

#[tokio::test]
async fn test_claim_rejection_logs_failure_and_stays_interactive() {
    init_logger();
    let sender = MockSender {
        send_error: Some(MintError::Transaction("user denied claim-rejection-test".into())),
        ..MockSender::default()
    };
    let (controller, _, sender) = connected(MockWallet::on(Chain::Mumbai), sender).await;

    let err = controller.claim().await.unwrap_err();

    assert!(err.is_transaction_error());
    assert!(logged(Level::Error, "contract call failure"));
    assert!(logged(Level::Error, "claim-rejection-test"));

    let state: MintState = controller.state();
    assert!(!state.pending);
    assert!(matches!(state.last_outcome, Some(ClaimOutcome::Failure { .. })));
    assert_eq!(MintView::from_state(&state), MintView::ClaimNft { busy: false });

    // Clickable again: the next claim reaches the wallet.
    let _ = controller.claim().await;
    assert_eq!(sender.sent.borrow().len(), 2);
}

#[tokio::test]
async fn test_claim_success_is_logged() {
    init_logger();
    let (controller, _, _) = connected(MockWallet::on(Chain::Mumbai), MockSender::default()).await;

    let receipt = controller.claim().await.unwrap();

    assert!(logged(Level::Info, "contract call success"));
    assert!(logged(Level::Info, &receipt.tx_hash));
}

#[tokio::test]
async fn test_reverted_claim_is_failure() {
    let sender = MockSender {
        reverted: true,
        ..MockSender::default()
    };
    let (controller, _, _) = connected(MockWallet::on(Chain::Mumbai), sender).await;

    assert!(matches!(controller.claim().await, Err(MintError::Reverted(_))));
    assert!(!controller.state().pending);
}

#[tokio::test]
async fn test_claim_without_wallet_is_not_submitted() {
    let (controller, _, sender) = controller(MockWallet::on(Chain::Mumbai), MockSender::default());

    assert_eq!(controller.claim().await.unwrap_err(), MintError::NotConnected);
    assert!(sender.sent.borrow().is_empty());
    assert!(!controller.state().pending);
}

#[tokio::test]
async fn test_claim_switches_chain_first() {
    init_logger();
    let (controller, wallet, sender) = connected(MockWallet::on(Chain::Polygon), MockSender::default()).await;

    controller.claim().await.unwrap();

    assert_eq!(wallet.switch_requests.get(), 1);
    assert_eq!(wallet.chain_id.get(), Chain::Mumbai.id());
    assert_eq!(sender.sent.borrow().len(), 1);
    assert!(logged(Level::Info, "switching wallet from polygon to mumbai"));
}

#[tokio::test]
async fn test_refused_chain_switch_aborts_claim() {
    let mut wallet = MockWallet::on(Chain::Ethereum);
    wallet.refuse_switch = true;
    let (controller, _, sender) = connected(wallet, MockSender::default()).await;

    assert!(controller.claim().await.is_err());
    assert!(sender.sent.borrow().is_empty());
    assert!(!controller.state().pending);
}

#[tokio::test]
async fn test_accepted_switch_on_wrong_chain_aborts_claim() {
    let mut wallet = MockWallet::on(Chain::Polygon);
    wallet.ignore_switch = true;
    let (controller, wallet, sender) = connected(wallet, MockSender::default()).await;

    assert_eq!(
        controller.claim().await.unwrap_err(),
        MintError::WrongChain { expected: Chain::Mumbai.id(), actual: Chain::Polygon.id() }
    );
    assert_eq!(wallet.switch_requests.get(), 1);
    assert!(sender.sent.borrow().is_empty());
    assert!(!controller.state().pending);
}

#[tokio::test]
async fn test_subscribers_observe_pending_transitions() {
    let (controller, _, _) = connected(MockWallet::on(Chain::Mumbai), MockSender::default()).await;
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    controller.subscribe(move |state| sink.borrow_mut().push(state.pending));

    controller.claim().await.unwrap();

    assert_eq!(*seen.borrow(), vec![true, false]);
}
