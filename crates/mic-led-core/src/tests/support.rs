use crate::{ActionId, CoreError, CoreResult, Insertion, TrayBackend};

use std::{cell::RefCell, panic::Location};

use error_location::ErrorLocation;

/// An item as the fake native menu displays it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Displayed {
    Item(ActionId, String),
    Submenu(ActionId, String, Vec<Displayed>),
}

pub(crate) struct FakeMenu {
    id: Option<ActionId>,
    label: String,
    items: RefCell<Vec<Displayed>>,
}

impl FakeMenu {
    fn new(id: Option<ActionId>, label: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
            items: RefCell::new(Vec::new()),
        }
    }

    fn insert<const HEAD: bool>(&self, item: Displayed) {
        let mut items = self.items.borrow_mut();
        if HEAD {
            items.insert(0, item);
        } else {
            items.push(item);
        }
    }
}

/// Records every native call. `HEAD` selects head-insertion semantics.
#[derive(Default)]
pub(crate) struct FakeBackend<const HEAD: bool> {
    pub(crate) installs: u32,
    pub(crate) modifies: u32,
    pub(crate) removes: u32,
    pub(crate) popups: u32,
    pub(crate) shown: Vec<&'static str>,
    pub(crate) fail_install: bool,
    pub(crate) fail_remove: bool,
    pub(crate) popup: Option<FakeMenu>,
}

pub(crate) type HeadBackend = FakeBackend<true>;
pub(crate) type TailBackend = FakeBackend<false>;

impl<const HEAD: bool> FakeBackend<HEAD> {
    /// Top-level popup contents in display order.
    pub(crate) fn displayed(&self) -> Vec<Displayed> {
        self.popup
            .as_ref()
            .map(|menu| menu.items.borrow().clone())
            .unwrap_or_default()
    }
}

#[track_caller]
fn backend_error(reason: &str) -> CoreError {
    CoreError::Backend {
        reason: reason.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

impl<const HEAD: bool> TrayBackend for FakeBackend<HEAD> {
    type Icon = &'static str;
    type Menu = FakeMenu;

    const INSERTION: Insertion = if HEAD {
        Insertion::Head
    } else {
        Insertion::Tail
    };

    fn create_root_menu(&mut self) -> CoreResult<FakeMenu> {
        Ok(FakeMenu::new(None, ""))
    }

    fn create_submenu(&mut self, id: ActionId, label: &str) -> CoreResult<FakeMenu> {
        Ok(FakeMenu::new(Some(id), label))
    }

    fn insert_item(&mut self, parent: &FakeMenu, id: ActionId, label: &str) -> CoreResult<()> {
        parent.insert::<HEAD>(Displayed::Item(id, label.to_string()));
        Ok(())
    }

    fn insert_submenu(&mut self, parent: &FakeMenu, submenu: FakeMenu) -> CoreResult<()> {
        let id = submenu
            .id
            .ok_or_else(|| backend_error("root menu attached as submenu"))?;
        parent.insert::<HEAD>(Displayed::Submenu(
            id,
            submenu.label,
            submenu.items.into_inner(),
        ));
        Ok(())
    }

    fn set_popup_menu(&mut self, menu: FakeMenu) -> CoreResult<()> {
        self.popup = Some(menu);
        Ok(())
    }

    fn install_icon(&mut self, icon: &&'static str, _tooltip: &str) -> CoreResult<()> {
        if self.fail_install {
            return Err(backend_error("shell refused icon"));
        }
        self.installs += 1;
        self.shown.push(*icon);
        Ok(())
    }

    fn modify_icon(&mut self, icon: &&'static str) -> CoreResult<()> {
        self.modifies += 1;
        self.shown.push(*icon);
        Ok(())
    }

    fn remove_icon(&mut self) -> CoreResult<()> {
        self.removes += 1;
        if self.fail_remove {
            return Err(backend_error("icon already gone"));
        }
        Ok(())
    }

    fn show_popup_menu(&mut self) -> CoreResult<()> {
        self.popups += 1;
        Ok(())
    }
}
