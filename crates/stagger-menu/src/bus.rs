#![forbid(unsafe_code)]

//! Command inbox and notice outbox.
//!
//! Other components (a top navigation bar, keyboard shortcuts, a demo
//! script) reach the menu through a cloneable [`MenuSender`]; the menu
//! drains pending commands at the start of every frame. Completed
//! transitions and navigations come back out as [`MenuNotice`]s, which the
//! host drains whenever it likes.

use std::sync::mpsc;

use crate::navigation::NavTarget;

/// Request sent to the menu from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Toggle,
    Open,
    Close,
}

/// Something the host should react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuNotice {
    /// An open transition completed.
    Opened,
    /// A close transition completed.
    Closed,
    /// An item was activated and the host should go here.
    Navigate(NavTarget),
}

/// Cloneable handle for sending [`MenuCommand`]s.
///
/// Sending never blocks. Commands sent after the menu is dropped are
/// discarded.
#[derive(Debug, Clone)]
pub struct MenuSender {
    tx: mpsc::Sender<MenuCommand>,
}

impl MenuSender {
    /// Queue a command. Returns `false` when the menu is gone.
    pub fn send(&self, command: MenuCommand) -> bool {
        self.tx.send(command).is_ok()
    }

    pub fn toggle(&self) -> bool {
        self.send(MenuCommand::Toggle)
    }

    pub fn open(&self) -> bool {
        self.send(MenuCommand::Open)
    }

    pub fn close(&self) -> bool {
        self.send(MenuCommand::Close)
    }
}

/// Receiving side owned by the menu.
#[derive(Debug)]
pub(crate) struct Inbox {
    tx: mpsc::Sender<MenuCommand>,
    rx: mpsc::Receiver<MenuCommand>,
}

impl Inbox {
    pub(crate) fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    pub(crate) fn sender(&self) -> MenuSender {
        MenuSender {
            tx: self.tx.clone(),
        }
    }

    /// Pending commands in send order.
    pub(crate) fn drain(&self) -> Vec<MenuCommand> {
        let mut commands = Vec::new();
        while let Ok(cmd) = self.rx.try_recv() {
            commands.push(cmd);
        }
        commands
    }
}
