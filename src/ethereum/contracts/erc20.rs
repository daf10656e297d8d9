//! ERC20 contract bindings.
//!
//! Only the read-only calls needed for balance reporting are bound.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IERC20 {
        function balanceOf(address account) external view returns (uint256);
        function decimals() external view returns (uint8);
    }
}
