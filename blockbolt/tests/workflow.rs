//! End-to-end runs of the two-step workflow: a /lock subcommand arms an
//! intent, the next right-click confirms it.

use std::path::PathBuf;
use std::sync::Arc;

use blockbolt::BlockBoltPlugin;
use bolt_api::command::CommandSender;
use bolt_api::events::block::block_break::BlockBreakEvent;
use bolt_api::events::player::player_interact::{InteractAction, PlayerInteractEvent};
use bolt_api::events::player::player_leave::PlayerLeaveEvent;
use bolt_api::events::player::player_move::PlayerMoveEvent;
use bolt_api::math::{BlockPos, Vector3};
use bolt_api::text::TextComponent;
use bolt_api::player::{MemorySink, Player};
use bolt_api::{Context, Plugin};
use uuid::Uuid;

const CHEST: BlockPos = BlockPos::new(12, 70, -4);

fn temp_folder() -> PathBuf {
    std::env::temp_dir().join(format!("blockbolt-it-{}", Uuid::new_v4()))
}

fn spawn_player(context: &Arc<Context>, name: &str) -> (Arc<Player>, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let player = Arc::new(Player::new(Uuid::new_v4(), name, sink.clone()));
    context.add_player(player.clone());
    (player, sink)
}

async fn load_plugin(context: &Arc<Context>) -> BlockBoltPlugin {
    let mut plugin = BlockBoltPlugin::new();
    plugin.on_load(context.clone()).await.unwrap();
    plugin
}

fn right_click(player: &Arc<Player>, pos: BlockPos) -> PlayerInteractEvent {
    PlayerInteractEvent {
        player: player.clone(),
        clicked_pos: Some(pos),
        dimension_id: 0,
        action: InteractAction::RightClick,
        cancelled: false,
    }
}

fn break_block(player: &Arc<Player>, pos: BlockPos) -> BlockBreakEvent {
    BlockBreakEvent {
        player: Some(player.clone()),
        block_position: pos,
        dimension_id: 0,
        cancelled: false,
    }
}

fn saw(sink: &MemorySink, needle: &str) -> bool {
    sink.messages()
        .iter()
        .any(|message| message.content().contains(needle))
}

#[tokio::test]
async fn lock_intent_confirms_exactly_once() {
    let context = Context::new(temp_folder());
    let _plugin = load_plugin(&context).await;
    let (steve, sink) = spawn_player(&context, "Steve");
    let sender = CommandSender::Player(steve.clone());

    context.dispatch_command(&sender, "/lock add").await.unwrap();
    assert!(saw(&sink, "Right-click a block to lock it."));

    let mut confirm = right_click(&steve, CHEST);
    context.fire(&mut confirm).await;
    assert!(confirm.cancelled);
    assert!(saw(&sink, "Block locked."));

    // The intent is consumed: the next click is a plain use by the owner.
    let mut plain = right_click(&steve, CHEST);
    context.fire(&mut plain).await;
    assert!(!plain.cancelled);
}

#[tokio::test]
async fn strangers_are_blocked_until_given_access() {
    let context = Context::new(temp_folder());
    let _plugin = load_plugin(&context).await;
    let (steve, _) = spawn_player(&context, "Steve");
    let (alex, alex_sink) = spawn_player(&context, "Alex");
    let steve_sender = CommandSender::Player(steve.clone());

    context
        .dispatch_command(&steve_sender, "/lock add")
        .await
        .unwrap();
    context.fire(&mut right_click(&steve, CHEST)).await;

    let mut blocked = right_click(&alex, CHEST);
    context.fire(&mut blocked).await;
    assert!(blocked.cancelled);
    assert!(saw(&alex_sink, "This block is locked."));

    context
        .dispatch_command(&steve_sender, "/lock give Alex")
        .await
        .unwrap();
    context.fire(&mut right_click(&steve, CHEST)).await;

    let mut allowed = right_click(&alex, CHEST);
    context.fire(&mut allowed).await;
    assert!(!allowed.cancelled);
}

#[tokio::test]
async fn revoking_access_locks_the_friend_out_again() {
    let context = Context::new(temp_folder());
    let _plugin = load_plugin(&context).await;
    let (steve, steve_sink) = spawn_player(&context, "Steve");
    let (alex, _) = spawn_player(&context, "Alex");
    let sender = CommandSender::Player(steve.clone());

    context.dispatch_command(&sender, "/lock add").await.unwrap();
    context.fire(&mut right_click(&steve, CHEST)).await;
    context
        .dispatch_command(&sender, "/lock give Alex")
        .await
        .unwrap();
    context.fire(&mut right_click(&steve, CHEST)).await;
    assert!(saw(&steve_sink, "Alex can now use this block."));

    context
        .dispatch_command(&sender, "/lock take Alex")
        .await
        .unwrap();
    context.fire(&mut right_click(&steve, CHEST)).await;
    assert!(saw(&steve_sink, "Alex can no longer use this block."));

    let mut blocked = right_click(&alex, CHEST);
    context.fire(&mut blocked).await;
    assert!(blocked.cancelled);
}

#[tokio::test]
async fn unlock_intent_and_cancel() {
    let context = Context::new(temp_folder());
    let _plugin = load_plugin(&context).await;
    let (steve, sink) = spawn_player(&context, "Steve");
    let (alex, _) = spawn_player(&context, "Alex");
    let sender = CommandSender::Player(steve.clone());

    context.dispatch_command(&sender, "/lock add").await.unwrap();
    context.fire(&mut right_click(&steve, CHEST)).await;

    context
        .dispatch_command(&sender, "/lock remove")
        .await
        .unwrap();
    context.fire(&mut right_click(&steve, CHEST)).await;
    assert!(saw(&sink, "Lock removed."));

    // The block is open again for everyone.
    let mut open = right_click(&alex, CHEST);
    context.fire(&mut open).await;
    assert!(!open.cancelled);

    // An armed intent that gets cancelled never fires.
    context.dispatch_command(&sender, "/lock add").await.unwrap();
    context
        .dispatch_command(&sender, "/lock cancel")
        .await
        .unwrap();
    let mut plain = right_click(&steve, CHEST);
    context.fire(&mut plain).await;
    assert!(!plain.cancelled);
}

#[tokio::test]
async fn info_intent_reports_lock_status() {
    let context = Context::new(temp_folder());
    let _plugin = load_plugin(&context).await;
    let (steve, _) = spawn_player(&context, "Steve");
    let (alex, alex_sink) = spawn_player(&context, "Alex");

    let steve_sender = CommandSender::Player(steve.clone());
    context
        .dispatch_command(&steve_sender, "/lock add")
        .await
        .unwrap();
    context.fire(&mut right_click(&steve, CHEST)).await;

    let alex_sender = CommandSender::Player(alex.clone());
    context
        .dispatch_command(&alex_sender, "/lock info")
        .await
        .unwrap();
    let mut inspect = right_click(&alex, CHEST);
    context.fire(&mut inspect).await;
    assert!(inspect.cancelled);
    assert!(saw(&alex_sink, "Locked by Steve"));
}

#[tokio::test]
async fn break_protection_spares_only_the_owner() {
    let context = Context::new(temp_folder());
    let _plugin = load_plugin(&context).await;
    let (steve, steve_sink) = spawn_player(&context, "Steve");
    let (alex, alex_sink) = spawn_player(&context, "Alex");

    let sender = CommandSender::Player(steve.clone());
    context.dispatch_command(&sender, "/lock add").await.unwrap();
    context.fire(&mut right_click(&steve, CHEST)).await;

    let mut denied = break_block(&alex, CHEST);
    context.fire(&mut denied).await;
    assert!(denied.cancelled);
    assert!(saw(&alex_sink, "This block is locked."));

    let mut owner_break = break_block(&steve, CHEST);
    context.fire(&mut owner_break).await;
    assert!(!owner_break.cancelled);
    assert!(saw(&steve_sink, "Lock removed together with the block."));

    // Gone with the block.
    let mut reuse = right_click(&alex, CHEST);
    context.fire(&mut reuse).await;
    assert!(!reuse.cancelled);
}

#[tokio::test]
async fn pending_intents_die_with_the_session() {
    let context = Context::new(temp_folder());
    let _plugin = load_plugin(&context).await;
    let (steve, _) = spawn_player(&context, "Steve");
    let sender = CommandSender::Player(steve.clone());

    context.dispatch_command(&sender, "/lock add").await.unwrap();

    context.remove_player(&steve.gameprofile.id);
    let mut leave = PlayerLeaveEvent {
        player: steve.clone(),
        leave_message: TextComponent::text("Steve left the game"),
    };
    context.fire(&mut leave).await;

    // Back online, the old intent must not fire.
    context.add_player(steve.clone());
    let mut plain = right_click(&steve, CHEST);
    context.fire(&mut plain).await;
    assert!(!plain.cancelled);
}

#[tokio::test]
async fn console_cannot_arm_intents() {
    let context = Context::new(temp_folder());
    let _plugin = load_plugin(&context).await;
    let sender = CommandSender::Console;

    let result = context.dispatch_command(&sender, "/lock add").await;
    assert!(matches!(result, Ok(0)));
}

#[tokio::test]
async fn afk_sweep_and_return() {
    let folder = temp_folder();
    std::fs::create_dir_all(&folder).unwrap();
    std::fs::write(folder.join("config.toml"), "[afk]\ntimeout_secs = 0\n").unwrap();

    let context = Context::new(folder);
    // Online before the (re)load, so the fresh tracker seeds Steve.
    let (steve, sink) = spawn_player(&context, "Steve");
    let plugin = load_plugin(&context).await;

    let state = plugin.state().unwrap();
    state.sweep_afk(&context).await;
    assert!(saw(&sink, "Steve is now AFK."));

    let mut step = PlayerMoveEvent {
        player: steve.clone(),
        from: Vector3::new(0.0, 64.0, 0.0),
        to: Vector3::new(1.0, 64.0, 0.0),
        cancelled: false,
    };
    context.fire(&mut step).await;
    assert!(saw(&sink, "Steve is no longer AFK."));
}
