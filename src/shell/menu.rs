use std::str::FromStr;

/// メニュー表示
pub const MENU: &str = "\n===== Library Menu =====\n\
1. Add Book\n\
2. Add Member\n\
3. Issue Book\n\
4. Return Book\n\
5. Show Inventory\n\
6. Exit\n\
Enter your choice: ";

/// メニューの選択肢
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    AddMember,
    IssueBook,
    ReturnBook,
    ShowInventory,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(1) => Ok(MenuChoice::AddBook),
            Ok(2) => Ok(MenuChoice::AddMember),
            Ok(3) => Ok(MenuChoice::IssueBook),
            Ok(4) => Ok(MenuChoice::ReturnBook),
            Ok(5) => Ok(MenuChoice::ShowInventory),
            Ok(6) => Ok(MenuChoice::Exit),
            _ => Err(format!("Invalid menu choice: {}", s.trim())),
        }
    }
}
